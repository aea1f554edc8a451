use std::collections::HashSet;
use std::io;

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::config::DotSettings;
use crate::estimate::estimate;
use crate::model::{Dot, NoteRef, ParsedOutline};
use crate::outline::has_content_under;
use crate::tags::{all_tags, has_tag};
use crate::words::{DefaultWordCounter, WordCounter};

/// Date-indexed lookup of periodic notes, owned by the host.
pub trait NoteIndex: Send + Sync {
    fn daily_note(&self, date: NaiveDate) -> Option<NoteRef>;
    fn weekly_note(&self, date: NaiveDate) -> Option<NoteRef>;
}

/// Access to note text. The host may serve cached content.
pub trait NoteStore: Send + Sync {
    fn read_to_string(&self, note: &NoteRef) -> io::Result<String>;
}

/// Access to the host's metadata index.
pub trait MetadataCache: Send + Sync {
    /// Heading/section structure of a note, or `None` while the note is
    /// not yet indexed.
    fn parsed_outline(&self, note: &NoteRef) -> Option<ParsedOutline>;

    /// All tags discoverable for an outline. The default body covers
    /// in-body and front-matter tags; hosts with their own tag rules
    /// can override.
    fn tags(&self, outline: &ParsedOutline) -> HashSet<String> {
        all_tags(outline)
    }
}

/// Per-day payload handed to the calendar renderer
#[derive(Debug, Clone, Serialize)]
pub struct DayMetadata {
    pub dots: Vec<Dot>,
}

/// Assembles the dot row for a daily or weekly note.
///
/// Each call operates on an independent snapshot of note content and
/// metadata; the source itself keeps no mutable state, so concurrent
/// calls for different notes do not interact.
pub struct WordCountSource {
    index: Box<dyn NoteIndex>,
    store: Box<dyn NoteStore>,
    cache: Box<dyn MetadataCache>,
    counter: Box<dyn WordCounter>,
}

impl WordCountSource {
    pub fn new(
        index: Box<dyn NoteIndex>,
        store: Box<dyn NoteStore>,
        cache: Box<dyn MetadataCache>,
    ) -> Self {
        Self {
            index,
            store,
            cache,
            counter: Box::new(DefaultWordCounter),
        }
    }

    /// Replace the word-counting rule with the host's own
    pub fn with_counter(mut self, counter: Box<dyn WordCounter>) -> Self {
        self.counter = counter;
        self
    }

    pub fn daily_dots(&self, date: NaiveDate, settings: &DotSettings) -> Vec<Dot> {
        self.dots_for_note(self.index.daily_note(date), settings)
    }

    pub fn weekly_dots(&self, date: NaiveDate, settings: &DotSettings) -> Vec<Dot> {
        self.dots_for_note(self.index.weekly_note(date), settings)
    }

    pub fn daily_metadata(&self, date: NaiveDate, settings: &DotSettings) -> DayMetadata {
        DayMetadata {
            dots: self.daily_dots(date, settings),
        }
    }

    pub fn weekly_metadata(&self, date: NaiveDate, settings: &DotSettings) -> DayMetadata {
        DayMetadata {
            dots: self.weekly_dots(date, settings),
        }
    }

    /// Final order: `[idea?] [thought?] [solid...]`
    fn dots_for_note(&self, note: Option<NoteRef>, settings: &DotSettings) -> Vec<Dot> {
        let Some(note) = note else {
            return Vec::new();
        };

        let text = match self.store.read_to_string(&note) {
            Ok(text) => text,
            Err(err) => {
                debug!("failed to read {}: {err}", note.path.display());
                String::new()
            }
        };

        let solid_count = estimate(&text, settings.words_per_dot, &*self.counter);
        let mut dots = vec![Dot::solid(); solid_count];

        // Outline and tags are resolved once per assembly and shared by
        // both detectors. A missing outline only costs the markers.
        let Some(outline) = self.cache.parsed_outline(&note) else {
            debug!("no parsed outline for {}", note.path.display());
            return dots;
        };

        if has_content_under(&outline, &settings.thoughts_heading) {
            dots.insert(0, Dot::thought());
        }

        let tags = self.cache.tags(&outline);
        if has_tag(&tags, &settings.idea_tag) {
            dots.insert(0, Dot::idea());
        }

        dots
    }
}
