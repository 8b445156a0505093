use serde::Deserialize;

use crate::error::Result;

/// Page copy, embedded at compile time and parsed once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub hero: Hero,
    pub about: Vec<FeatureCard>,
    pub roadmap: Vec<FeatureCard>,
    pub feedback: Feedback,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub title: String,
    pub intro: String,
    pub note: String,
}

/// One bordered card: a title, a short badge folded into the title line, and
/// a wrapped body paragraph.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub badge: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feedback {
    pub note_title: String,
    pub note: String,
    pub help_title: String,
    pub help_body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub status: Vec<String>,
    /// Prompt shown in the companion's thought bubble.
    pub bubble: String,
}

const EMBEDDED: &str = include_str!("../assets/content.json");

impl Content {
    pub fn embedded() -> Result<Self> {
        Ok(serde_json::from_str(EMBEDDED)?)
    }
}
