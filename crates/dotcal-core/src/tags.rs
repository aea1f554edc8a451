use crate::model::ParsedOutline;
use std::collections::HashSet;

/// Exact-match membership test.
///
/// No normalization, no case folding, no prefix matching; the query must
/// match a stored tag literally, leading `#` included. An empty query is
/// never present.
pub fn has_tag(tags: &HashSet<String>, tag: &str) -> bool {
    !tag.is_empty() && tags.contains(tag)
}

/// Collects every tag discoverable in an outline: body occurrences as-is,
/// plus front-matter `tags` (list of strings, or one comma-separated
/// string), trimmed and normalized to carry a leading `#`.
pub fn all_tags(outline: &ParsedOutline) -> HashSet<String> {
    let mut tags: HashSet<String> = outline.tags.iter().map(|t| t.tag.clone()).collect();

    if let Some(value) = outline.frontmatter.as_ref().and_then(|fm| fm.get("tags")) {
        match value {
            serde_json::Value::Array(entries) => {
                for entry in entries {
                    if let Some(raw) = entry.as_str() {
                        insert_normalized(&mut tags, raw);
                    }
                }
            }
            serde_json::Value::String(raw) => {
                for part in raw.split(',') {
                    insert_normalized(&mut tags, part);
                }
            }
            _ => {}
        }
    }

    tags
}

fn insert_normalized(tags: &mut HashSet<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    if let Some(stripped) = trimmed.strip_prefix('#') {
        if stripped.is_empty() {
            return;
        }
        tags.insert(trimmed.to_string());
    } else {
        tags.insert(format!("#{trimmed}"));
    }
}
