use std::collections::HashSet;
use serde::{ Deserialize, Serialize };
use crate::error::ConfigError;

const SITE_JSON: &str = include_str!("../../assets/site.json");

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    /// Comma separated words cycled by the typing effect.
    pub roles: String,
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// A navigable page section; `id` doubles as the anchor target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SiteConfig {
    /// Parses and validates the content bundled with the page.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        log::info!(
            "Loaded site content for {} ({} sections, {} projects)",
            config.owner,
            config.sections.len(),
            config.projects.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::Invalid("owner must not be empty".to_string()));
        }
        if self.roles.split(',').all(|w| w.trim().is_empty()) {
            return Err(ConfigError::Invalid("roles must list at least one word".to_string()));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            let id = section.id.trim();
            if id.is_empty() {
                return Err(ConfigError::Invalid(format!("section '{}' has no id", section.title)));
            }
            if !seen.insert(id) {
                return Err(ConfigError::Invalid(format!("duplicate section id '{}'", id)));
            }
        }
        Ok(())
    }

    /// Minimal content used when the bundled file cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            owner: "Portfolio".to_string(),
            roles: crate::utils::typewriter::DEFAULT_WORD.to_string(),
            ..Self::default()
        }
    }

    pub fn section_title(&self, id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.title.as_str())
    }
}
