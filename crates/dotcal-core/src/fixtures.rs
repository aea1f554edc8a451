//! Test-only helpers that build [`ParsedOutline`] values from markdown,
//! so detector tests can use realistic section shapes instead of
//! hand-numbered line ranges. The shipped crate never parses markdown;
//! the host's metadata index owns that.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::model::{Heading, ParsedOutline, Point, Section, SectionKind, TextRange};

struct LineMap {
    line_starts: Vec<usize>,
}

impl LineMap {
    fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    fn offset_to_point(&self, text: &str, offset: usize) -> Point {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => Point {
                line: line as u32,
                col: 0,
            },
            Err(next_line_idx) => {
                let line = next_line_idx - 1;
                let line_start = self.line_starts[line];
                let col = text[line_start..offset].encode_utf16().count();
                Point {
                    line: line as u32,
                    col: col as u32,
                }
            }
        }
    }
}

fn section_kind(tag: &Tag) -> Option<SectionKind> {
    match tag {
        Tag::Heading { .. } => Some(SectionKind::Heading),
        Tag::Paragraph => Some(SectionKind::Paragraph),
        Tag::List(_) => Some(SectionKind::List),
        Tag::CodeBlock(_) => Some(SectionKind::Code),
        Tag::BlockQuote(_) => Some(SectionKind::Blockquote),
        Tag::Table(_) => Some(SectionKind::Table),
        _ => None,
    }
}

fn is_section_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Heading(_)
            | TagEnd::Paragraph
            | TagEnd::List(_)
            | TagEnd::CodeBlock
            | TagEnd::BlockQuote(_)
            | TagEnd::Table
    )
}

/// Block ranges from pulldown-cmark run past the trailing newline; pull
/// the end offset back so start and end describe the block's own lines.
fn trim_trailing_newlines(text: &str, start: usize, mut end: usize) -> usize {
    while end > start && matches!(text.as_bytes().get(end - 1), Some(b'\n') | Some(b'\r')) {
        end -= 1;
    }
    end
}

/// Build the heading/section outline of a markdown document, shaped the
/// way the host's metadata index reports it.
pub fn outline_of(text: &str) -> ParsedOutline {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let line_map = LineMap::new(text);

    let mut headings = Vec::new();
    let mut sections = Vec::new();

    let mut depth = 0usize;
    let mut open_section: Option<(SectionKind, usize)> = None;

    let mut in_heading = false;
    let mut current_heading_level = 0u8;
    let mut pending_heading: Option<(String, usize)> = None;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if let Some(kind) = section_kind(&tag) {
                    if depth == 0 {
                        open_section = Some((kind, range.start));
                    }
                    depth += 1;
                }
                if let Tag::Heading { level, .. } = tag {
                    in_heading = true;
                    current_heading_level = level as u8;
                    pending_heading = Some((String::new(), range.start));
                }
            }
            Event::End(tag_end) => {
                if is_section_end(&tag_end) {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if let Some((kind, start)) = open_section.take() {
                            let end = trim_trailing_newlines(text, start, range.end);
                            sections.push(Section {
                                kind,
                                range: TextRange {
                                    start: line_map.offset_to_point(text, start),
                                    end: line_map.offset_to_point(text, end),
                                },
                            });
                        }
                    }
                }
                if matches!(tag_end, TagEnd::Heading(_)) {
                    if let Some((heading_text, start)) = pending_heading.take() {
                        let trimmed = heading_text.trim().to_string();
                        if !trimmed.is_empty() {
                            let end = trim_trailing_newlines(text, start, range.end);
                            headings.push(Heading {
                                level: current_heading_level,
                                text: trimmed,
                                range: TextRange {
                                    start: line_map.offset_to_point(text, start),
                                    end: line_map.offset_to_point(text, end),
                                },
                            });
                        }
                    }
                    in_heading = false;
                }
            }
            Event::Text(cow_str) | Event::Code(cow_str) => {
                if in_heading {
                    if let Some((ref mut heading_text, _)) = pending_heading.as_mut() {
                        if !heading_text.is_empty() {
                            heading_text.push(' ');
                        }
                        heading_text.push_str(cow_str.as_ref());
                    }
                }
            }
            _ => {}
        }
    }

    ParsedOutline {
        headings,
        sections,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::has_content_under;

    #[test]
    fn test_outline_shape() {
        let outline = outline_of("# Daily\n\n## Thoughts\n\nsome text\n\n- a\n- b\n");

        let titles: Vec<&str> = outline.headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(titles, ["Daily", "Thoughts"]);
        assert_eq!(outline.headings[1].range.start.line, 2);
        assert_eq!(outline.headings[1].range.end.line, 2);

        let kinds: Vec<SectionKind> = outline.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                SectionKind::Heading,
                SectionKind::Heading,
                SectionKind::Paragraph,
                SectionKind::List,
            ]
        );
        assert_eq!(outline.sections[2].range.start.line, 4);
    }

    #[test]
    fn test_populated_section_detected() {
        let outline = outline_of("## Thoughts\n\nwoke up with a plan\n\n## Tasks\n\n- buy milk\n");
        assert!(has_content_under(&outline, "Thoughts"));
    }

    #[test]
    fn test_blank_section_not_detected() {
        let outline = outline_of("## Thoughts\n\n## Tasks\n\n- buy milk\n");
        assert!(!has_content_under(&outline, "Thoughts"));
    }

    #[test]
    fn test_trailing_section_detected() {
        let outline = outline_of("## Tasks\n\n- buy milk\n\n## Thoughts\n\nlate entry\n");
        assert!(has_content_under(&outline, "Thoughts"));
    }

    #[test]
    fn test_trailing_blank_section_not_detected() {
        let outline = outline_of("## Tasks\n\n- buy milk\n\n## Thoughts\n");
        assert!(!has_content_under(&outline, "Thoughts"));
    }

    #[test]
    fn test_list_only_section_detected() {
        let outline = outline_of("## Thoughts\n\n- first\n- second\n");
        assert!(has_content_under(&outline, "Thoughts"));
    }
}
