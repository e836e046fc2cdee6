//! # REDLEV site renderer
//!
//! Binds a single content document (`data/content.json`) into a static
//! page by element id, so editors can update the site by editing one
//! data file.
//!
//! ## Features
//!
//! - **Graceful degradation**: every field is optional; missing text falls
//!   back to editorial defaults, missing links and images are hidden
//! - **Deterministic renders**: each pass re-derives the whole page, list
//!   sections are rebuilt from scratch
//! - **Panama clock**: a timezone-aware clock with a fixed-offset fallback
//! - **Host-agnostic**: rendering goes through a narrow target-provider
//!   interface
//!
//! ## Modules
//!
//! - [`content`]: content document model and loader
//! - [`page`]: UI target provider, catalogue, in-memory page
//! - [`render`]: field binder and section renderers
//! - [`clock`]: periodic clock service
//! - [`site`]: the page-load pipeline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use redlev::{page, Config, MemoryPage, Site};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let site = Site::from_config(&Config::default())?;
//!     let page = page::shared(MemoryPage::catalogue());
//!
//!     let boot = site.boot(&page).await;
//!     boot.content?;
//!
//!     println!("{}", page.lock().await.to_html());
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod content;
pub mod page;
pub mod render;
pub mod site;

pub use clock::{ClockError, ClockFormatter, ClockHandle, ClockService, ClockZone};

pub use config::{ClockConfig, Config, ConfigError, ContentConfig, LoggingConfig};

pub use content::{
    ContentDocument, ContentError, ContentLoader, ContentLocation, ContentResult, ContentSource,
    StaticSource,
};

pub use page::{MemoryPage, Node, SharedPage, TargetProvider, UiTarget};

pub use render::{render_document, set_image, set_link, set_text};

pub use site::{Boot, Site, LOAD_FAILURE_MESSAGE};
