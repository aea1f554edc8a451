use crate::model::ParsedOutline;

/// Determines whether the section under `heading_name` is non-empty.
///
/// Looks up the first heading whose text equals `heading_name` exactly
/// (case-sensitive), then reports whether any non-heading section starts
/// strictly after that heading and at or before the limit line. The limit
/// is the next heading's start line; when the target is the last heading
/// it falls back to the start line of the last section after the target.
pub fn has_content_under(outline: &ParsedOutline, heading_name: &str) -> bool {
    if heading_name.is_empty() {
        return false;
    }

    let Some(target) = outline.headings.iter().find(|h| h.text == heading_name) else {
        return false;
    };

    let next_heading = outline
        .headings
        .iter()
        .find(|h| h.range.start.line > target.range.end.line);

    let Some(last_section) = outline
        .sections
        .iter()
        .rev()
        .find(|s| s.range.start.line > target.range.end.line)
    else {
        // nothing at all after the heading
        return false;
    };

    let limit = next_heading
        .map(|h| h.range.start.line)
        .unwrap_or(last_section.range.start.line);

    outline.sections.iter().any(|s| {
        !s.kind.is_heading()
            && s.range.start.line > target.range.end.line
            && s.range.start.line <= limit
    })
}
