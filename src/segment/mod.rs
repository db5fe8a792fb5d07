//! Document segmentation
//!
//! Splits a markdown-like knowledge-base document into heading/body entries.
//! A line starting with `**` or `#` opens a new block; the first line of a
//! block is its heading and the remaining non-blank lines form the body.
//!
//! ```text
//! **Vacation**                 -> Entry { heading: "Vacation",
//! You get 28 days per year.              body: "You get 28 days per year." }
//! # Remote                     -> Entry { heading: "Remote",
//! Up to 3 days per week.                 body: "Up to 3 days per week." }
//! ```

use crate::types::Entry;

/// Markup stripped from both ends of a heading line; inner `**` pairs are also dropped
const HEADING_MARKS: &[char] = &['*', '#'];

/// Quotes removed anywhere in a heading
const HEADING_QUOTES: &[char] = &['«', '»'];

/// Split a document into entries, in document order.
///
/// Never fails: text before the first heading, blocks without a body and
/// blocks whose heading or body is empty after cleaning are dropped.
pub fn segment(document: &str) -> Vec<Entry> {
    Blocks::new(document).filter_map(block_to_entry).collect()
}

fn block_to_entry(lines: Vec<&str>) -> Option<Entry> {
    let (heading_line, body_lines) = lines.split_first()?;
    if body_lines.is_empty() {
        return None;
    }

    let heading: String = heading_line
        .trim()
        .trim_matches(HEADING_MARKS)
        .replace("**", "")
        .chars()
        .filter(|c| !HEADING_QUOTES.contains(c))
        .collect();
    let body = body_lines.join("\n");

    Entry::new(heading.trim(), body.trim())
}

fn is_heading_line(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("**") || line.starts_with('#')
}

/// Iterator over blocks of non-blank lines, each starting at a heading line
struct Blocks<'a> {
    lines: std::iter::Peekable<std::str::Lines<'a>>,
}

impl<'a> Blocks<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            lines: document.lines().peekable(),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip to the next heading line, discarding anything before it.
        let heading = loop {
            let line = self.lines.next()?;
            if is_heading_line(line) {
                break line;
            }
        };

        let mut block = vec![heading];
        while let Some(&line) = self.lines.peek() {
            if is_heading_line(line) {
                break;
            }
            if !line.trim().is_empty() {
                block.push(line);
            }
            self.lines.next();
        }
        Some(block)
    }
}
