//! Dotcal Core Library
//!
//! Pure analysis core that turns a daily/weekly note into a row of
//! calendar dots: word-count-derived solid dots plus marker dots for
//! "has an idea tag" and "has content under a heading".
//! No IO dependencies; note text, outlines, and tags come from the host
//! through collaborator traits.
//!

pub mod config;
pub mod estimate;
pub mod model;
pub mod outline;
pub mod source;
pub mod tags;
pub mod words;

#[cfg(test)]
mod fixtures;

pub use config::{DotSettings, DEFAULT_WORDS_PER_DOT};
pub use estimate::{estimate, NUM_MAX_DOTS};
pub use model::{
    Dot, DotColor, DotMarker, Heading, NoteRef, ParsedOutline, Point, Section, SectionKind,
    TagEntry, TextRange,
};
pub use outline::has_content_under;
pub use source::{DayMetadata, MetadataCache, NoteIndex, NoteStore, WordCountSource};
pub use tags::{all_tags, has_tag};
pub use words::{word_count, DefaultWordCounter, WordCounter};
