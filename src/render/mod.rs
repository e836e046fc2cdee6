//! Rendering Pipeline
//!
//! Binds a [`ContentDocument`] onto a page. Every pass re-derives the
//! whole visible state from the document; nothing is kept between
//! passes.
//!
//! - [`binder`]: `set_text` / `set_link` / `set_image`
//! - [`global`]: identity, metrics and links
//! - [`sections`]: hero, about, next activity, featured research
//! - [`activities`] and [`committee`]: list sections

pub mod activities;
pub mod binder;
pub mod committee;
pub mod global;
pub mod sections;

pub use activities::render_recent_activities;
pub use binder::{set_image, set_link, set_text};
pub use committee::render_committee;
pub use global::render_global;
pub use sections::render_sections;

use crate::content::ContentDocument;
use crate::page::{Node, TargetProvider};

/// Render the whole document: global fields, then sections
pub fn render_document<P: TargetProvider + ?Sized>(page: &mut P, doc: &ContentDocument) {
    render_global(page, doc);
    render_sections(page, doc);
}

/// Swap a container's children for `cards`; missing container is a no-op
fn rebuild<P: TargetProvider + ?Sized>(page: &mut P, container: &str, cards: Vec<Node>) {
    match page.target(container) {
        Some(mut target) => {
            tracing::debug!(container, cards = cards.len(), "Rebuilding list");
            target.replace_children(cards);
        }
        None => tracing::trace!(container, "List container not on page, skipping"),
    }
}

/// Link that opens in a new context without an opener handle or referrer
fn external_link(url: &str, label: &str) -> Node {
    Node::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}
