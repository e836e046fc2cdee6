//! Mobile navigation toggle

use super::catalogue::{NAV_TOGGLE, PAGE_BODY};
use super::target::TargetProvider;

/// Class placed on the page body while the menu is open
pub const NAV_OPEN_CLASS: &str = "nav-open";

/// Flip the menu between open and closed.
///
/// Hosts call this each time the `navToggle` control is activated.
/// Returns the new state, or `None` when the page has no toggle control.
pub fn toggle_nav<P: TargetProvider + ?Sized>(page: &mut P) -> Option<bool> {
    // Only pages that carry the control get the behavior.
    page.target(NAV_TOGGLE)?;

    let open = page
        .target(PAGE_BODY)
        .map(|mut body| body.toggle_class(NAV_OPEN_CLASS))
        .unwrap_or(false);

    if let Some(mut toggle) = page.target(NAV_TOGGLE) {
        toggle.set_attr("aria-expanded", if open { "true" } else { "false" });
    }

    tracing::debug!(open, "Navigation toggled");
    Some(open)
}
