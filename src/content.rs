//! Static page content, embedded at build time from `content/site.json`.

use crate::age::CalendarDate;
use serde::{Deserialize, Deserializer};

const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid birth date {0}")]
    BirthDate(CalendarDate),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillLine>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub avatar: Option<String>,
    pub birth_date: Option<CalendarDate>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

/// One carousel slide. A missing or blank `image` means the slide is drawn
/// with the fallback fill colour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillLine {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub text: String,
    pub href: Option<String>,
    #[serde(default)]
    pub icon: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        if let Some(birth_date) = content.profile.birth_date {
            if !birth_date.is_valid() {
                return Err(ContentError::BirthDate(birth_date));
            }
        }
        Ok(content)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(SITE_CONTENT_JSON)
    }
}
