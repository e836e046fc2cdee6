//! Content Layer
//!
//! The content document (`data/content.json`), its tolerant decoding, and
//! the loader that retrieves it.

pub mod error;
pub mod loader;
pub mod model;
pub mod text;

pub use error::{ContentError, ContentResult};
pub use loader::{
    ContentLoader, ContentLocation, ContentSource, Retrieved, StaticSource, CONTENT_PATH,
};
pub use model::{
    About, Activities, ActivityRecord, CommitteeMember, ContentDocument, FeaturedResearch, Home,
    Links, NextActivity, SiteInfo,
};
pub use text::Text;
