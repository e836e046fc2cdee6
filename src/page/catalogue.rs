//! UI target catalogue
//!
//! Every element id the renderers bind to. The page markup owns these
//! elements; the renderers only consume the ids.

// Identity and metrics
pub const SITE_NAME: &str = "siteName";
pub const SITE_TAGLINE: &str = "siteTagline";
pub const FOOTER_NAME: &str = "footerName";
pub const FOUNDED_YEAR: &str = "foundedYear";
pub const MEMBERS_COUNT: &str = "membersCount";
pub const TIMEZONE_LABEL: &str = "timezoneMetricLabel";
pub const FOOTER_YEAR: &str = "year";
pub const CLOCK: &str = "panamaClock";

// Operational and social links
pub const JOIN_LINK: &str = "joinLink";
pub const JOIN_LINK_2: &str = "joinLink2";
pub const CONTACT_LINK: &str = "contactLink";
pub const CONTACT_LINK_2: &str = "contactLink2";
pub const PRIVACY_LINK: &str = "privacyLink";
pub const YOUTUBE_LINK: &str = "youtubeLink";
pub const YOUTUBE_LINK_2: &str = "youtubeLink2";
pub const X_LINK: &str = "xLink";
pub const FACEBOOK_LINK: &str = "facebookLink";
pub const INSTAGRAM_LINK: &str = "instagramLink";
pub const LINKEDIN_LINK: &str = "linkedinLink";

// Hero and about
pub const HERO_TITLE: &str = "heroTitle";
pub const HERO_OBJECTIVE: &str = "heroObjective";
pub const ABOUT_TEXT: &str = "aboutText";

// Next activity
pub const NEXT_EYEBROW: &str = "nextEyebrow";
pub const NEXT_TITLE: &str = "nextTitle";
pub const NEXT_META: &str = "nextMeta";
pub const NEXT_DESCRIPTION: &str = "nextDescription";
pub const NEXT_CTA: &str = "nextCta";
pub const NEXT_IMAGE: &str = "nextImage";

// Featured research
pub const RESEARCH_EYEBROW: &str = "researchEyebrow";
pub const RESEARCH_TITLE: &str = "researchTitle";
pub const RESEARCH_CITATION: &str = "researchCitation";
pub const RESEARCH_ABSTRACT: &str = "researchAbstract";
pub const RESEARCH_LINK: &str = "researchLink";

// List containers
pub const RECENT_ACTIVITIES: &str = "recentActivities";
pub const COMMITTEE_GRID: &str = "committeeGrid";

// Navigation
pub const NAV_TOGGLE: &str = "navToggle";
pub const PAGE_BODY: &str = "body";

/// Every catalogued id paired with the tag the page markup uses for it
pub const CATALOGUE: &[(&str, &str)] = &[
    (PAGE_BODY, "body"),
    (NAV_TOGGLE, "button"),
    (SITE_NAME, "span"),
    (SITE_TAGLINE, "span"),
    (HERO_TITLE, "h1"),
    (HERO_OBJECTIVE, "p"),
    (FOUNDED_YEAR, "strong"),
    (MEMBERS_COUNT, "strong"),
    (CLOCK, "strong"),
    (TIMEZONE_LABEL, "span"),
    (JOIN_LINK, "a"),
    (JOIN_LINK_2, "a"),
    (CONTACT_LINK, "a"),
    (CONTACT_LINK_2, "a"),
    (ABOUT_TEXT, "p"),
    (NEXT_EYEBROW, "p"),
    (NEXT_TITLE, "h2"),
    (NEXT_META, "p"),
    (NEXT_DESCRIPTION, "p"),
    (NEXT_CTA, "a"),
    (NEXT_IMAGE, "img"),
    (RECENT_ACTIVITIES, "div"),
    (RESEARCH_EYEBROW, "p"),
    (RESEARCH_TITLE, "h2"),
    (RESEARCH_CITATION, "p"),
    (RESEARCH_ABSTRACT, "p"),
    (RESEARCH_LINK, "a"),
    (COMMITTEE_GRID, "div"),
    (YOUTUBE_LINK, "a"),
    (YOUTUBE_LINK_2, "a"),
    (X_LINK, "a"),
    (FACEBOOK_LINK, "a"),
    (INSTAGRAM_LINK, "a"),
    (LINKEDIN_LINK, "a"),
    (PRIVACY_LINK, "a"),
    (FOOTER_NAME, "span"),
    (FOOTER_YEAR, "span"),
];

/// Tag for a catalogued id
pub fn tag_for(id: &str) -> Option<&'static str> {
    CATALOGUE
        .iter()
        .find(|(catalogued, _)| *catalogued == id)
        .map(|(_, tag)| *tag)
}
