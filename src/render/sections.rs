//! Section Renderer
//!
//! Hero, about, next activity and featured research, then the two list
//! sections.

use super::activities::render_recent_activities;
use super::binder::{set_image, set_link, set_text};
use super::committee::render_committee;
use crate::content::text::{present, raw};
use crate::content::ContentDocument;
use crate::page::catalogue::*;
use crate::page::TargetProvider;

pub const NEXT_EYEBROW_DEFAULT: &str = "Próxima actividad";
pub const NEXT_CTA_DEFAULT: &str = "Inscripción / Información";
pub const NEXT_IMAGE_ALT_DEFAULT: &str = "Imagen actividad";
pub const RESEARCH_EYEBROW_DEFAULT: &str = "Este mes destacamos";
pub const RESEARCH_LINK_DEFAULT: &str = "Ver publicación";

/// Bind every page section
pub fn render_sections<P: TargetProvider + ?Sized>(page: &mut P, doc: &ContentDocument) {
    // Hero
    let tagline = doc.site.as_ref().and_then(|s| raw(&s.tagline));
    set_text(page, HERO_TITLE, tagline);
    set_text(page, HERO_OBJECTIVE, doc.home.as_ref().and_then(|h| raw(&h.objective)));

    // About
    set_text(page, ABOUT_TEXT, doc.about.as_ref().and_then(|a| raw(&a.intro)));

    // Next activity
    let next = doc.next_activity.clone().unwrap_or_default();
    set_text(
        page,
        NEXT_EYEBROW,
        Some(present(&next.eyebrow).unwrap_or(NEXT_EYEBROW_DEFAULT)),
    );
    set_text(page, NEXT_TITLE, raw(&next.title));
    set_text(page, NEXT_META, raw(&next.datetime_text));
    set_text(page, NEXT_DESCRIPTION, raw(&next.description));
    set_link(
        page,
        NEXT_CTA,
        raw(&next.cta_url),
        Some(present(&next.cta_label).unwrap_or(NEXT_CTA_DEFAULT)),
    );
    set_image(
        page,
        NEXT_IMAGE,
        raw(&next.image),
        Some(present(&next.image_alt).unwrap_or(NEXT_IMAGE_ALT_DEFAULT)),
    );

    render_recent_activities(page, doc.recent_activities());

    // Featured research
    let research = doc.featured_research.clone().unwrap_or_default();
    set_text(
        page,
        RESEARCH_EYEBROW,
        Some(present(&research.eyebrow).unwrap_or(RESEARCH_EYEBROW_DEFAULT)),
    );
    set_text(page, RESEARCH_TITLE, raw(&research.title));
    set_text(page, RESEARCH_CITATION, raw(&research.citation));
    set_text(page, RESEARCH_ABSTRACT, raw(&research.abstract_text));
    set_link(
        page,
        RESEARCH_LINK,
        raw(&research.paper_url),
        Some(present(&research.paper_label).unwrap_or(RESEARCH_LINK_DEFAULT)),
    );

    render_committee(page, &doc.committee);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    fn render(json: &str) -> MemoryPage {
        let mut page = MemoryPage::catalogue();
        let doc = ContentDocument::from_slice(json.as_bytes()).unwrap();
        render_sections(&mut page, &doc);
        page
    }

    #[test]
    fn test_missing_sections_default_or_hide() {
        let page = render("{}");

        assert_eq!(page.text_of(NEXT_EYEBROW), NEXT_EYEBROW_DEFAULT);
        assert_eq!(page.text_of(RESEARCH_EYEBROW), RESEARCH_EYEBROW_DEFAULT);
        assert_eq!(page.text_of(NEXT_TITLE), "");
        assert_eq!(page.text_of(RESEARCH_ABSTRACT), "");
        assert!(page.is_hidden(NEXT_CTA));
        assert!(page.is_hidden(NEXT_IMAGE));
        assert!(page.is_hidden(RESEARCH_LINK));
        assert!(page.get(RECENT_ACTIVITIES).unwrap().children.is_empty());
        assert!(page.get(COMMITTEE_GRID).unwrap().children.is_empty());
    }

    #[test]
    fn test_next_activity_cta_default_label() {
        let page = render(r#"{"next_activity": {"title": "Seminario", "cta_url": "https://forms.example.org"}}"#);

        let cta = page.get(NEXT_CTA).unwrap();
        assert!(!cta.hidden);
        assert_eq!(cta.get_attr("href"), Some("https://forms.example.org"));
        assert_eq!(cta.text, NEXT_CTA_DEFAULT);
        assert_eq!(page.text_of(NEXT_TITLE), "Seminario");
    }

    #[test]
    fn test_next_activity_supplied_values() {
        let page = render(
            r#"{"next_activity": {"eyebrow": "Este jueves", "datetime_text": "12 de marzo, 18:00",
                "description": "Charla", "cta_url": "https://x.org", "cta_label": "Regístrate",
                "image": "img/a.png"}}"#,
        );

        assert_eq!(page.text_of(NEXT_EYEBROW), "Este jueves");
        assert_eq!(page.text_of(NEXT_META), "12 de marzo, 18:00");
        assert_eq!(page.text_of(NEXT_DESCRIPTION), "Charla");
        assert_eq!(page.text_of(NEXT_CTA), "Regístrate");

        let img = page.get(NEXT_IMAGE).unwrap();
        assert_eq!(img.get_attr("src"), Some("img/a.png"));
        assert_eq!(img.get_attr("alt"), Some(NEXT_IMAGE_ALT_DEFAULT));
    }

    #[test]
    fn test_empty_eyebrow_falls_back() {
        let page = render(r#"{"next_activity": {"eyebrow": ""}, "featured_research": {"eyebrow": ""}}"#);
        assert_eq!(page.text_of(NEXT_EYEBROW), NEXT_EYEBROW_DEFAULT);
        assert_eq!(page.text_of(RESEARCH_EYEBROW), RESEARCH_EYEBROW_DEFAULT);
    }

    #[test]
    fn test_featured_research() {
        let page = render(
            r#"{"featured_research": {"title": "Paper", "citation": "Autor (2024)",
                "abstract": "Resumen", "paper_url": "https://doi.org/10.1/x"}}"#,
        );

        assert_eq!(page.text_of(RESEARCH_TITLE), "Paper");
        assert_eq!(page.text_of(RESEARCH_CITATION), "Autor (2024)");
        assert_eq!(page.text_of(RESEARCH_ABSTRACT), "Resumen");
        assert_eq!(page.text_of(RESEARCH_LINK), RESEARCH_LINK_DEFAULT);
        assert!(!page.is_hidden(RESEARCH_LINK));
    }

    #[test]
    fn test_hero_and_about() {
        let page = render(
            r#"{"site": {"tagline": "Red de investigación"}, "home": {"objective": "Objetivo"},
                "about": {"intro": "Somos"}}"#,
        );

        assert_eq!(page.text_of(HERO_TITLE), "Red de investigación");
        assert_eq!(page.text_of(HERO_OBJECTIVE), "Objetivo");
        assert_eq!(page.text_of(ABOUT_TEXT), "Somos");
    }
}
