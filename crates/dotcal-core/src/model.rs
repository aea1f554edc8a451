use serde::{Deserialize, Serialize};
use serde_json;
use std::path::PathBuf;

/// Core internal coordinate system (0-based)
/// Does not directly use the host's position type to avoid coupling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: u32,
    pub col: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub range: TextRange,
}

/// Block kinds the host's metadata index distinguishes.
/// The detectors only ever ask "heading or not".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Heading,
    Paragraph,
    List,
    Code,
    Blockquote,
    Table,
}

impl SectionKind {
    pub fn is_heading(self) -> bool {
        matches!(self, SectionKind::Heading)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub range: TextRange,
}

/// A tag occurrence in the note body, e.g. `#idea`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
    pub range: TextRange,
}

/// Heading/section structure of one note, produced by the host's
/// metadata index. This core only reads it.
///
/// `headings` and `sections` are in document order; line numbers are
/// monotonically non-decreasing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedOutline {
    pub headings: Vec<Heading>,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub tags: Vec<TagEntry>,
    #[serde(default)]
    pub frontmatter: Option<serde_json::Value>,
}

/// Handle to a note owned by the host, identified by path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteRef {
    pub path: PathBuf,
}

impl NoteRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotColor {
    Default,
}

/// Semantic class of an unfilled marker dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotMarker {
    Idea,
    Thought,
}

/// One display descriptor on a calendar day cell.
///
/// Solid dots are filled and carry a color class; marker dots are
/// unfilled and carry only a semantic class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dot {
    Solid { color: DotColor },
    Marker { marker: DotMarker },
}

impl Dot {
    pub fn solid() -> Self {
        Dot::Solid {
            color: DotColor::Default,
        }
    }

    pub fn idea() -> Self {
        Dot::Marker {
            marker: DotMarker::Idea,
        }
    }

    pub fn thought() -> Self {
        Dot::Marker {
            marker: DotMarker::Thought,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Dot::Solid { .. })
    }

    /// CSS class the host renders this dot with
    pub fn class_name(&self) -> &'static str {
        match self {
            Dot::Solid { .. } => "default",
            Dot::Marker {
                marker: DotMarker::Idea,
            } => "idea",
            Dot::Marker {
                marker: DotMarker::Thought,
            } => "thought",
        }
    }
}
