//! Recent-Activities Renderer

use super::{external_link, rebuild};
use crate::content::text::present;
use crate::content::ActivityRecord;
use crate::page::catalogue::RECENT_ACTIVITIES;
use crate::page::{Node, TargetProvider};

pub const ACTIVITY_TITLE_DEFAULT: &str = "Seminario REDLEV";
pub const ACTIVITY_CTA_DEFAULT: &str = "Ver";

/// Replace the activity list with one card per record, in order
pub fn render_recent_activities<P: TargetProvider + ?Sized>(page: &mut P, items: &[ActivityRecord]) {
    rebuild(page, RECENT_ACTIVITIES, items.iter().map(activity_card).collect());
}

/// Card for a single activity.
///
/// Subtitle and speaker lines exist only when supplied; the action row
/// only when there is a URL.
pub fn activity_card(item: &ActivityRecord) -> Node {
    let mut card = Node::new("article").class("card").child(
        Node::new("h3")
            .class("h3")
            .text(present(&item.title).unwrap_or(ACTIVITY_TITLE_DEFAULT)),
    );

    if let Some(subtitle) = present(&item.subtitle) {
        card = card.child(Node::new("p").class("text").text(subtitle));
    }
    if let Some(speaker) = present(&item.speaker) {
        card = card.child(Node::new("p").class("meta").text(speaker));
    }

    if let Some(url) = present(&item.cta_url) {
        let label = present(&item.cta_label).unwrap_or(ACTIVITY_CTA_DEFAULT);
        card = card.child(
            Node::new("div")
                .class("actions")
                .child(external_link(url, label).class("button button-secondary")),
        );
    }

    card
}
