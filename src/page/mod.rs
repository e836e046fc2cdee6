//! Page Layer
//!
//! Everything the renderers know about the host page:
//!
//! - **Target provider**: lookup-by-id seam ([`TargetProvider`], [`UiTarget`])
//! - **Nodes**: host-agnostic element trees used for cards and snapshots
//! - **Catalogue**: the fixed set of ids the renderers bind to
//! - **Memory page**: an in-memory provider for snapshots and tests
//! - **Navigation**: the mobile menu toggle

pub mod catalogue;
pub mod memory;
pub mod nav;
pub mod node;
pub mod target;

pub use memory::MemoryPage;
pub use nav::{toggle_nav, NAV_OPEN_CLASS};
pub use node::Node;
pub use target::{TargetProvider, UiTarget};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Page shared between the render flow and the clock task
pub type SharedPage<P> = Arc<Mutex<P>>;

/// Wrap a provider for sharing
pub fn shared<P>(page: P) -> SharedPage<P> {
    Arc::new(Mutex::new(page))
}
