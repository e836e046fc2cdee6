//! Content document model
//!
//! The shape of `data/content.json`. Every field is optional; defaulting
//! happens in the renderers, field by field.

use super::text::{records, section, Text};
use serde::{Deserialize, Serialize};

/// Root of the content document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteInfo>,
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub home: Option<Home>,
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub next_activity: Option<NextActivity>,
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub featured_research: Option<FeaturedResearch>,
    #[serde(deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub activities: Option<Activities>,
    #[serde(deserialize_with = "records", skip_serializing_if = "Vec::is_empty")]
    pub committee: Vec<CommitteeMember>,
}

/// Site identity and headline metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: Option<Text>,
    pub tagline: Option<Text>,
    pub founded_year: Option<Text>,
    pub members_count: Option<Text>,
    pub default_timezone_label: Option<Text>,
}

/// Operational and social URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub join_form: Option<Text>,
    pub contact_form: Option<Text>,
    pub privacy_policy: Option<Text>,
    pub youtube: Option<Text>,
    pub x: Option<Text>,
    pub facebook_group: Option<Text>,
    pub instagram: Option<Text>,
    pub linkedin: Option<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Home {
    pub objective: Option<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub intro: Option<Text>,
}

/// The highlighted upcoming activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextActivity {
    pub eyebrow: Option<Text>,
    pub title: Option<Text>,
    pub datetime_text: Option<Text>,
    pub description: Option<Text>,
    pub cta_url: Option<Text>,
    pub cta_label: Option<Text>,
    pub image: Option<Text>,
    pub image_alt: Option<Text>,
}

/// Research highlighted this month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedResearch {
    pub eyebrow: Option<Text>,
    pub title: Option<Text>,
    pub citation: Option<Text>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<Text>,
    pub paper_url: Option<Text>,
    pub paper_label: Option<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activities {
    #[serde(deserialize_with = "records")]
    pub recent: Vec<ActivityRecord>,
}

/// One past activity (seminar, talk)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityRecord {
    pub title: Option<Text>,
    pub subtitle: Option<Text>,
    pub speaker: Option<Text>,
    pub cta_url: Option<Text>,
    pub cta_label: Option<Text>,
}

/// One committee member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitteeMember {
    pub name: Option<Text>,
    pub url: Option<Text>,
    pub focus: Option<Text>,
}

impl ContentDocument {
    /// Parse a document from raw JSON bytes.
    ///
    /// Only malformed JSON is an error. A root that is not an object
    /// yields the empty document.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<serde_json::Value>(bytes)? {
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Recent activities, empty when the section is missing
    pub fn recent_activities(&self) -> &[ActivityRecord] {
        self.activities
            .as_ref()
            .map(|a| a.recent.as_slice())
            .unwrap_or(&[])
    }

    /// A starter document for editors, with every section filled in
    pub fn template() -> Self {
        Self {
            site: Some(SiteInfo {
                name: Some("REDLEV".into()),
                tagline: Some("Red de investigación".into()),
                founded_year: Some("2020".into()),
                members_count: Some("0".into()),
                default_timezone_label: Some("Hora de Panamá".into()),
            }),
            links: Some(Links {
                join_form: Some("https://forms.example.org/join".into()),
                contact_form: Some("https://forms.example.org/contact".into()),
                privacy_policy: Some("privacy.html".into()),
                youtube: Some("https://www.youtube.com/@example".into()),
                ..Default::default()
            }),
            home: Some(Home {
                objective: Some("Objetivo de la red.".into()),
            }),
            about: Some(About {
                intro: Some("Quiénes somos.".into()),
            }),
            next_activity: Some(NextActivity {
                title: Some("Título de la próxima actividad".into()),
                datetime_text: Some("Jueves 12 de marzo, 18:00 (hora de Panamá)".into()),
                description: Some("Descripción breve.".into()),
                cta_url: Some("https://forms.example.org/register".into()),
                ..Default::default()
            }),
            featured_research: Some(FeaturedResearch {
                title: Some("Título del artículo".into()),
                citation: Some("Autor, A. (2024). Revista, 1(1), 1-10.".into()),
                abstract_text: Some("Resumen.".into()),
                paper_url: Some("https://doi.org/10.0000/example".into()),
                ..Default::default()
            }),
            activities: Some(Activities {
                recent: vec![ActivityRecord {
                    title: Some("Seminario REDLEV".into()),
                    subtitle: Some("Tema del seminario".into()),
                    speaker: Some("Ponente".into()),
                    cta_url: Some("https://www.youtube.com/watch?v=example".into()),
                    cta_label: Some("Ver grabación".into()),
                }],
            }),
            committee: vec![CommitteeMember {
                name: Some("Nombre Apellido".into()),
                url: Some("https://orcid.org/0000-0000-0000-0000".into()),
                focus: Some("Área de investigación".into()),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::text::raw;

    #[test]
    fn test_empty_object_is_valid() {
        let doc = ContentDocument::from_slice(b"{}").unwrap();
        assert_eq!(doc, ContentDocument::default());
        assert!(doc.recent_activities().is_empty());
    }

    #[test]
    fn test_partial_document() {
        let doc = ContentDocument::from_slice(
            br#"{
                "site": {"name": "REDLEV", "founded_year": 2020, "members_count": "45"},
                "featured_research": {"abstract": "Resumen", "unknown_key": 1},
                "activities": {"recent": [{"title": "Seminar A"}]},
                "committee": [{"name": "Ada Lovelace", "url": "https://example.org/ada"}]
            }"#,
        )
        .unwrap();

        let site = doc.site.as_ref().unwrap();
        assert_eq!(raw(&site.name), Some("REDLEV"));
        assert_eq!(raw(&site.founded_year), Some("2020"));
        assert!(site.tagline.is_none());
        assert_eq!(
            raw(&doc.featured_research.as_ref().unwrap().abstract_text),
            Some("Resumen")
        );
        assert_eq!(doc.recent_activities().len(), 1);
        assert_eq!(doc.committee.len(), 1);
        assert!(doc.links.is_none());
    }

    #[test]
    fn test_template_reparses() {
        let json = serde_json::to_string_pretty(&ContentDocument::template()).unwrap();
        let doc = ContentDocument::from_slice(json.as_bytes()).unwrap();
        assert_eq!(doc, ContentDocument::template());
    }
}
