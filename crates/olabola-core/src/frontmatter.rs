use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};
use serde_json::Value;

/// Extract the leading YAML metadata block of a note as JSON.
///
/// Returns `None` when the note has no frontmatter or the YAML does not parse.
pub fn parse_frontmatter(text: &str) -> Option<Value> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut in_frontmatter = false;
    let mut frontmatter_content = String::new();

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = true;
            }
            Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                return serde_yaml::from_str::<Value>(&frontmatter_content).ok();
            }
            Event::Text(cow_str) if in_frontmatter => {
                frontmatter_content.push_str(&cow_str);
            }
            // Only a block at the very start of the note counts as frontmatter.
            _ if !in_frontmatter => return None,
            _ => {}
        }
    }

    None
}

/// The fields of a note's frontmatter the grid cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieMeta {
    pub isbn: Option<String>,
    pub poster: Option<String>,
    /// First entry of `dates`, or empty.
    pub date: String,
}

impl MovieMeta {
    pub fn from_frontmatter(fm: &Value) -> Self {
        Self {
            isbn: fm.get("isbn").and_then(non_empty_scalar),
            poster: fm
                .get("poster")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            date: fm.get("dates").map(first_date).unwrap_or_default(),
        }
    }

    pub fn has_isbn(&self) -> bool {
        self.isbn.is_some()
    }
}

fn non_empty_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(scalar_text(other)),
    }
}

fn first_date(value: &Value) -> String {
    match value {
        Value::Array(items) => items.first().map(scalar_text).unwrap_or_default(),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(text: &str) -> MovieMeta {
        MovieMeta::from_frontmatter(&parse_frontmatter(text).unwrap())
    }

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\nisbn: 978-3\nposter: assets/jaws.jpg\n---\n# Jaws";
        let fm = parse_frontmatter(content).unwrap();

        assert_eq!(fm["isbn"], "978-3");
        assert_eq!(fm["poster"], "assets/jaws.jpg");
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(parse_frontmatter("# Just a heading\n\nBody").is_none());
        assert!(parse_frontmatter("").is_none());
    }

    #[test]
    fn test_metadata_block_later_in_note_is_ignored() {
        let content = "Intro paragraph\n\n---\nisbn: 1\n---\n";
        assert!(parse_frontmatter(content).is_none());
    }

    #[test]
    fn test_numeric_isbn_counts() {
        let m = meta("---\nisbn: 0000\n---\n");
        assert!(m.has_isbn());
    }

    #[test]
    fn test_empty_isbn_does_not_count() {
        assert!(!meta("---\nisbn: \"\"\n---\n").has_isbn());
        assert!(!meta("---\nisbn:\n---\n").has_isbn());
        assert!(!meta("---\nisbn: false\n---\n").has_isbn());
    }

    #[test]
    fn test_dates_as_string_or_list() {
        assert_eq!(meta("---\ndates: 1975-06-20\n---\n").date, "1975-06-20");
        assert_eq!(
            meta("---\ndates:\n  - 2001-01-01\n  - 2002-02-02\n---\n").date,
            "2001-01-01"
        );
        assert_eq!(meta("---\ndates: []\n---\n").date, "");
        assert_eq!(meta("---\nisbn: 1\n---\n").date, "");
    }

    #[test]
    fn test_blank_poster_is_absent() {
        assert_eq!(meta("---\nposter: \"  \"\n---\n").poster, None);
        assert_eq!(
            meta("---\nposter: assets/a b.jpg\n---\n").poster.as_deref(),
            Some("assets/a b.jpg")
        );
    }
}
