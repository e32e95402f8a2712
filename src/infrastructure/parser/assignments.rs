//! Built-in parseAll collaborator
//!
//! Extracts assignment blocks ("Задание N ...") from an e-learning page.
//! Recoverable content issues (no assignments found) yield the sentinel
//! string; only a broken setup errs.

use regex::Regex;

use crate::application::ports::{HtmlParse, ParseAllFailure};
use crate::domain::PARSE_FAILURE_SENTINEL;

/// Regex-based assignment extractor.
pub struct AssignmentParser {
    noise: Regex,
    tags: Regex,
    spaces: Regex,
    marker: Regex,
}

impl AssignmentParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // script/style subtrees carry no assignment text
            noise: Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>")?,
            tags: Regex::new(r"(?s)<[^>]*>")?,
            spaces: Regex::new(r"\s+")?,
            marker: Regex::new(r"Задание\s*№?\s*\d+")?,
        })
    }

    /// Strip markup down to the page's visible text.
    fn visible_text(&self, html: &str) -> String {
        let stripped = self.noise.replace_all(html, " ");
        let text = self.tags.replace_all(&stripped, " ");
        let text = text
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&");
        self.spaces.replace_all(&text, " ").trim().to_string()
    }
}

impl HtmlParse for AssignmentParser {
    fn parse_all(&self, html: &str) -> Result<String, ParseAllFailure> {
        let text = self.visible_text(html);

        let starts: Vec<usize> = self.marker.find_iter(&text).map(|m| m.start()).collect();
        if starts.is_empty() {
            return Ok(PARSE_FAILURE_SENTINEL.to_string());
        }

        let mut blocks = Vec::with_capacity(starts.len());
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            blocks.push(text[start..end].trim().to_string());
        }

        Ok(blocks.join("\n"))
    }
}
