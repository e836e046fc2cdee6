//! Field Binder
//!
//! The three bind primitives every renderer goes through. A missing
//! target is never an error: pages may leave optional sections out.

use crate::page::{TargetProvider, UiTarget};

/// Write `value` as plain text; absent becomes empty text
pub fn set_text<P: TargetProvider + ?Sized>(page: &mut P, id: &str, value: Option<&str>) {
    match page.target(id) {
        Some(mut target) => target.set_text(value.unwrap_or("")),
        None => skipped(id),
    }
}

/// Point a link at `url`, hiding it when there is no URL
pub fn set_link<P: TargetProvider + ?Sized>(
    page: &mut P,
    id: &str,
    url: Option<&str>,
    label: Option<&str>,
) {
    bind_or_hide(page, id, url, |target, url| {
        target.set_attr("href", url);
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            target.set_text(label);
        }
    });
}

/// Point an image at `src`, hiding it when there is no source
pub fn set_image<P: TargetProvider + ?Sized>(
    page: &mut P,
    id: &str,
    src: Option<&str>,
    alt: Option<&str>,
) {
    bind_or_hide(page, id, src, |target, src| {
        target.set_attr("src", src);
        if let Some(alt) = alt.filter(|a| !a.is_empty()) {
            target.set_attr("alt", alt);
        }
    });
}

/// Hide-if-empty policy shared by links and images
fn bind_or_hide<P, F>(page: &mut P, id: &str, value: Option<&str>, apply: F)
where
    P: TargetProvider + ?Sized,
    F: FnOnce(&mut dyn UiTarget, &str),
{
    let Some(mut target) = page.target(id) else {
        skipped(id);
        return;
    };

    match value.filter(|v| !v.is_empty()) {
        Some(value) => {
            apply(target.as_mut(), value);
            target.set_hidden(false);
        }
        None => target.set_hidden(true),
    }
}

fn skipped(id: &str) {
    tracing::trace!(target_id = id, "UI target not on page, skipping");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn test_set_text() {
        let mut page = MemoryPage::with_targets(&["siteName"]);

        set_text(&mut page, "siteName", Some("REDLEV"));
        assert_eq!(page.text_of("siteName"), "REDLEV");

        set_text(&mut page, "siteName", None);
        assert_eq!(page.text_of("siteName"), "");

        // Missing target is a silent no-op
        set_text(&mut page, "heroTitle", Some("x"));
        assert!(page.get("heroTitle").is_none());
    }

    #[test]
    fn test_set_link_hides_and_restores() {
        let mut page = MemoryPage::with_targets(&["joinLink"]);

        set_link(&mut page, "joinLink", None, Some("Únete"));
        assert!(page.is_hidden("joinLink"));

        set_link(&mut page, "joinLink", Some(""), Some("Únete"));
        assert!(page.is_hidden("joinLink"));

        set_link(&mut page, "joinLink", Some("https://forms.example.org"), Some("Únete"));
        let link = page.get("joinLink").unwrap();
        assert!(!link.hidden);
        assert_eq!(link.get_attr("href"), Some("https://forms.example.org"));
        assert_eq!(link.text, "Únete");
    }

    #[test]
    fn test_set_link_keeps_label_without_override() {
        let mut page = MemoryPage::with_targets(&["contactLink"]);
        set_text(&mut page, "contactLink", Some("Escríbenos"));

        set_link(&mut page, "contactLink", Some("mailto:info@example.org"), None);
        assert_eq!(page.text_of("contactLink"), "Escríbenos");
    }

    #[test]
    fn test_set_image() {
        let mut page = MemoryPage::with_targets(&["nextImage"]);

        set_image(&mut page, "nextImage", Some("img/poster.png"), Some("Afiche"));
        let img = page.get("nextImage").unwrap();
        assert_eq!(img.get_attr("src"), Some("img/poster.png"));
        assert_eq!(img.get_attr("alt"), Some("Afiche"));
        assert!(!img.hidden);

        set_image(&mut page, "nextImage", None, Some("Afiche"));
        assert!(page.is_hidden("nextImage"));
    }

    #[test]
    fn test_binds_are_idempotent() {
        let mut once = MemoryPage::with_targets(&["nextCta"]);
        set_link(&mut once, "nextCta", Some("https://x.org"), Some("Ver"));

        let mut twice = once.clone();
        set_link(&mut twice, "nextCta", Some("https://x.org"), Some("Ver"));
        assert_eq!(once, twice);
    }
}
