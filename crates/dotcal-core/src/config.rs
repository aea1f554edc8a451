use serde::{Deserialize, Serialize};

/// Solid-dot divisor used when the host has not configured one
pub const DEFAULT_WORDS_PER_DOT: f64 = 250.0;

/// Read-only settings snapshot for dot assembly.
///
/// The host owns storage and editing of these values; this core receives
/// a snapshot per call and never mutates or persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotSettings {
    /// How many words one solid dot stands for
    #[serde(default = "default_words_per_dot")]
    pub words_per_dot: f64,
    /// Tag that marks a note as containing an idea (exact match, `#` included)
    #[serde(default = "default_idea_tag")]
    pub idea_tag: String,
    /// Heading whose section is checked for content (exact match)
    #[serde(default = "default_thoughts_heading")]
    pub thoughts_heading: String,
}

fn default_words_per_dot() -> f64 {
    DEFAULT_WORDS_PER_DOT
}

fn default_idea_tag() -> String {
    "#idea".to_string()
}

fn default_thoughts_heading() -> String {
    "Thoughts".to_string()
}

impl Default for DotSettings {
    fn default() -> Self {
        Self {
            words_per_dot: default_words_per_dot(),
            idea_tag: default_idea_tag(),
            thoughts_heading: default_thoughts_heading(),
        }
    }
}

impl DotSettings {
    /// Load settings from a YAML snapshot
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
