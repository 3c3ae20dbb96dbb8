//! Static page content.
//!
//! The content document is authored as JSON and deserialized once at
//! startup; nothing here mutates after load. [`Content::from_json_str`]
//! validates the invariants the navigation machinery relies on before any
//! state machine is built on top of the document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content document failures, raised at load time.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid json")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate nav link id: {id}")]
    DuplicateNavId { id: String },
}

/// One entry of the header navigation.
///
/// The `id` doubles as the section identifier the scroll tracker reports,
/// so ids must be unique across the document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

/// A portfolio project card.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub demo_url: String,
    pub github_url: String,

    /// Whether the project is surfaced on the front page.
    #[serde(default)]
    pub featured: bool,
}

/// One testimonial quote.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TestimonialItem {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
}

/// The full static content document.
///
/// List order is significant everywhere: nav links render in order,
/// testimonial order defines the carousel index space.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Content {
    #[serde(default)]
    pub nav_links: Vec<NavLink>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub testimonials: Vec<TestimonialItem>,
}

impl Content {
    /// Parse and validate a content document.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for link in &self.nav_links {
            if !seen.insert(link.id.as_str()) {
                return Err(ContentError::DuplicateNavId {
                    id: link.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Projects flagged for the front page, in declaration order.
    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| project.featured)
    }
}
