//! Global Renderer
//!
//! Site-wide identity, metrics and the fixed set of operational/social
//! links.

use super::binder::{set_link, set_text};
use crate::content::text::raw;
use crate::content::{ContentDocument, Links, Text};
use crate::page::catalogue::*;
use crate::page::TargetProvider;

/// A link target, the field feeding it, and its fixed label
pub struct LinkSlot {
    pub target: &'static str,
    pub label: &'static str,
    field: fn(&Links) -> &Option<Text>,
}

impl LinkSlot {
    /// URL for this slot in `links`, if any
    pub fn url<'a>(&self, links: &'a Links) -> Option<&'a str> {
        raw((self.field)(links))
    }
}

/// Every link slot on the page
pub const LINK_SLOTS: &[LinkSlot] = &[
    LinkSlot { target: JOIN_LINK, label: "Únete", field: |l| &l.join_form },
    LinkSlot { target: JOIN_LINK_2, label: "Formulario de registro", field: |l| &l.join_form },
    LinkSlot { target: CONTACT_LINK, label: "Contacto", field: |l| &l.contact_form },
    LinkSlot { target: CONTACT_LINK_2, label: "Contacto", field: |l| &l.contact_form },
    LinkSlot { target: PRIVACY_LINK, label: "Privacidad", field: |l| &l.privacy_policy },
    LinkSlot { target: YOUTUBE_LINK, label: "YouTube", field: |l| &l.youtube },
    LinkSlot { target: YOUTUBE_LINK_2, label: "YouTube", field: |l| &l.youtube },
    LinkSlot { target: X_LINK, label: "X", field: |l| &l.x },
    LinkSlot { target: FACEBOOK_LINK, label: "Facebook", field: |l| &l.facebook_group },
    LinkSlot { target: INSTAGRAM_LINK, label: "Instagram", field: |l| &l.instagram },
    LinkSlot { target: LINKEDIN_LINK, label: "LinkedIn", field: |l| &l.linkedin },
];

/// Bind identity, metrics and links
pub fn render_global<P: TargetProvider + ?Sized>(page: &mut P, doc: &ContentDocument) {
    let site = doc.site.clone().unwrap_or_default();

    set_text(page, SITE_NAME, raw(&site.name));
    set_text(page, SITE_TAGLINE, raw(&site.tagline));
    set_text(page, FOOTER_NAME, raw(&site.name));

    set_text(page, FOUNDED_YEAR, raw(&site.founded_year));
    set_text(page, MEMBERS_COUNT, raw(&site.members_count));

    // The label lives beside the clock, never in it
    set_text(page, TIMEZONE_LABEL, raw(&site.default_timezone_label));

    let links = doc.links.clone().unwrap_or_default();
    for slot in LINK_SLOTS {
        set_link(page, slot.target, slot.url(&links), Some(slot.label));
    }
}
