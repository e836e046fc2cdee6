//! Site pipeline
//!
//! What happens on page load: bind the footer year, start the clock,
//! then fetch the content document and render it. A failed load leaves
//! one diagnostic in the hero objective and renders nothing else.

use crate::clock::{ClockHandle, ClockService};
use crate::config::Config;
use crate::content::{
    ContentError, ContentLoader, ContentLocation, ContentResult, StaticSource,
};
use crate::page::catalogue::{FOOTER_YEAR, HERO_OBJECTIVE};
use crate::page::{SharedPage, TargetProvider};
use crate::render::{render_document, set_text};
use chrono::{Datelike, Local};
use std::sync::Arc;
use std::time::Duration;

/// Shown in the hero objective when the content document cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str =
    "No se pudo cargar el contenido. Revisa data/content.json y la consola del navegador.";

/// The renderer for one site: where its content lives and how its clock runs
pub struct Site {
    loader: ContentLoader,
    location: ContentLocation,
    clock: ClockService,
}

/// Result of a page load
#[derive(Debug)]
pub struct Boot {
    /// The running clock; dropping it stops the timer
    pub clock: ClockHandle,
    /// Outcome of the content load
    pub content: ContentResult<()>,
}

impl Site {
    pub fn new(loader: ContentLoader, location: ContentLocation, clock: ClockService) -> Self {
        Self {
            loader,
            location,
            clock,
        }
    }

    /// Build a site from configuration, using the static-hosting source
    pub fn from_config(config: &Config) -> ContentResult<Self> {
        let source = StaticSource::new(Duration::from_secs(config.content.request_timeout_secs))?;
        let location = ContentLocation::resolve(&config.content.base, &config.content.path)?;

        Ok(Self::new(
            ContentLoader::new(Arc::new(source)),
            location,
            ClockService::from_config(&config.clock),
        ))
    }

    pub fn location(&self) -> &ContentLocation {
        &self.location
    }

    pub fn clock(&self) -> &ClockService {
        &self.clock
    }

    /// Load the page: footer year, clock, then content
    pub async fn boot<P>(&self, page: &SharedPage<P>) -> Boot
    where
        P: TargetProvider + Send + 'static,
    {
        {
            let mut guard = page.lock().await;
            bind_footer_year(&mut *guard, Local::now().year());
        }

        // The clock never waits on the content
        let clock = self.clock.clone().start(page.clone()).await;
        let content = self.load_and_render(page).await;

        Boot { clock, content }
    }

    /// Fetch the content document and render it in one pass
    pub async fn load_and_render<P>(&self, page: &SharedPage<P>) -> ContentResult<()>
    where
        P: TargetProvider,
    {
        let loaded = self.loader.load(&self.location).await;

        let mut guard = page.lock().await;
        match loaded {
            Ok(document) => {
                render_document(&mut *guard, &document);
                tracing::info!(location = %self.location, "Page rendered");
                Ok(())
            }
            Err(e) => {
                report_failure(&mut *guard, &e);
                Err(e)
            }
        }
    }
}

/// Write the current year into the footer
pub fn bind_footer_year<P: TargetProvider + ?Sized>(page: &mut P, year: i32) {
    set_text(page, FOOTER_YEAR, Some(year.to_string().as_str()));
}

fn report_failure<P: TargetProvider + ?Sized>(page: &mut P, error: &ContentError) {
    tracing::error!(error = %error, "Failed to load content");
    set_text(page, HERO_OBJECTIVE, Some(LOAD_FAILURE_MESSAGE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ClockFormatter, ClockZone};
    use crate::content::{ContentSource, Retrieved};
    use crate::page::catalogue::*;
    use crate::page::{shared, MemoryPage};
    use async_trait::async_trait;

    struct FixedSource(u16, &'static str);

    #[async_trait]
    impl ContentSource for FixedSource {
        async fn retrieve(&self, _location: &ContentLocation) -> ContentResult<Retrieved> {
            Ok(Retrieved {
                status: self.0,
                body: self.1.as_bytes().to_vec(),
            })
        }
    }

    fn site(status: u16, body: &'static str) -> Site {
        Site::new(
            ContentLoader::new(Arc::new(FixedSource(status, body))),
            ContentLocation::resolve("https://redlev.org/", crate::content::CONTENT_PATH).unwrap(),
            ClockService::new(
                ClockFormatter::new(ClockZone::Named(chrono_tz::America::Panama), "%H:%M"),
                CLOCK,
                "--:--",
                Duration::from_secs(30),
            ),
        )
    }

    const CONTENT: &str = r#"{
        "site": {"name": "REDLEV"},
        "home": {"objective": "Objetivo"},
        "activities": {"recent": [{"title": "Seminar A"}]}
    }"#;

    #[tokio::test(start_paused = true)]
    async fn test_boot_renders_everything() {
        let page = shared(MemoryPage::catalogue());
        let boot = site(200, CONTENT).boot(&page).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(boot.content.is_ok());
        assert!(boot.clock.is_running());

        let page = page.lock().await;
        assert_eq!(page.text_of(SITE_NAME), "REDLEV");
        assert_eq!(page.text_of(HERO_OBJECTIVE), "Objetivo");
        assert_eq!(page.get(RECENT_ACTIVITIES).unwrap().children.len(), 1);
        assert_eq!(page.text_of(FOOTER_YEAR), Local::now().year().to_string());
        assert_eq!(page.text_of(CLOCK).len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_shows_diagnostic_only() {
        let page = shared(MemoryPage::catalogue());
        let boot = site(404, "").boot(&page).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(matches!(boot.content, Err(ContentError::Fetch { status: Some(404), .. })));

        let page = page.lock().await;
        assert_eq!(page.text_of(HERO_OBJECTIVE), LOAD_FAILURE_MESSAGE);
        // No renderer ran: defaults and hides were never applied
        assert_eq!(page.text_of(NEXT_EYEBROW), "");
        assert!(!page.is_hidden(NEXT_CTA));
        assert!(!page.is_hidden(JOIN_LINK));
        // The clock does not depend on content
        assert!(boot.clock.is_running());
        assert_eq!(page.text_of(CLOCK).len(), 5);
    }

    #[tokio::test]
    async fn test_parse_failure_shows_diagnostic() {
        let page = shared(MemoryPage::catalogue());
        let result = site(200, "{\"site\": ").load_and_render(&page).await;

        assert!(matches!(result, Err(ContentError::Parse(_))));
        assert_eq!(page.lock().await.text_of(HERO_OBJECTIVE), LOAD_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_null_document_renders_defaults() {
        let page = shared(MemoryPage::catalogue());
        let result = site(200, "null").load_and_render(&page).await;

        assert!(result.is_ok());
        let page = page.lock().await;
        assert_ne!(page.text_of(HERO_OBJECTIVE), LOAD_FAILURE_MESSAGE);
        assert_eq!(
            page.text_of(NEXT_EYEBROW),
            crate::render::sections::NEXT_EYEBROW_DEFAULT
        );
        assert!(page.is_hidden(JOIN_LINK));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.content.base = "https://redlev.org/index.html".to_string();

        let site = Site::from_config(&config).unwrap();
        assert_eq!(
            site.location().to_string(),
            "https://redlev.org/data/content.json"
        );
    }
}
