//! The fenced `grid` block embedded in the index note.
//!
//! ````text
//! ```grid
//! Jaws,posters/jaws.jpg,1975-06-20
//! Alien,,1979-05-25
//! ```
//! ````
//!
//! One record per line, comma separated, no escaping.

use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

/// One row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRecord {
    pub title: String,
    pub poster: String,
    pub date: String,
}

impl GridRecord {
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.title, self.poster, self.date)
    }
}

/// A located grid block inside a note's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBlock {
    /// Byte span of the whole block, fences included.
    pub span: Range<usize>,
    pub body: String,
    tag: String,
    /// Line ending after the opening fence, reused for new rows.
    newline: String,
}

impl GridBlock {
    /// Find the first block fenced with ```` ```<tag> ````.
    ///
    /// The match is non-greedy: the block ends at the first closing fence.
    pub fn find(content: &str, tag: &str) -> Option<Self> {
        let pattern = format!(r"(?s)```{}[ \t]*(\r?\n)(.*?)```", regex::escape(tag));
        let re = Regex::new(&pattern).ok()?;
        let caps = re.captures(content)?;
        let whole = caps.get(0)?;
        let newline = caps.get(1).map(|m| m.as_str()).unwrap_or("\n");
        let body = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        Some(Self {
            span: whole.range(),
            body: body.to_string(),
            tag: tag.to_string(),
            newline: newline.to_string(),
        })
    }

    /// Titles already present, i.e. the first field of every non-blank line.
    pub fn titles(&self) -> HashSet<String> {
        self.body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.split(',').next())
            .map(|title| title.trim().to_string())
            .collect()
    }

    /// Append `new_lines` to the block and return the full updated content.
    pub fn splice(&self, content: &str, new_lines: &[String]) -> String {
        let existing = self.body.trim();
        let mut body = String::with_capacity(existing.len() + 64 * new_lines.len());
        if !existing.is_empty() {
            body.push_str(existing);
            body.push_str(&self.newline);
        }
        body.push_str(&new_lines.join(self.newline.as_str()));

        let nl = &self.newline;
        let block = format!("```{}{nl}{}{nl}```", self.tag, body);

        let mut updated = String::with_capacity(content.len() + block.len());
        updated.push_str(&content[..self.span.start]);
        updated.push_str(&block);
        updated.push_str(&content[self.span.end..]);
        updated
    }
}
