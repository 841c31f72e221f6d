//! Domain model shared by every layer. A `Book` is a plain, immutable value:
//! repositories create them once, the service hands out borrows, and the UI
//! only reads them back for display.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalog entry. Identity for lookups is the title, compared without
/// regard to letter case; nothing enforces uniqueness.
pub struct Book {
    title: String,
    author: String,
    details: String,
}

impl Book {
    /// Build a book from raw strings. Empty values are accepted as-is.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            details: details.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Case-insensitive title comparison used by every repository. Folding
    /// is done one character at a time, so context-sensitive rules such as
    /// the Greek final sigma do not apply.
    pub fn matches_title(&self, query: &str) -> bool {
        let mut title = self.title.chars();
        let mut query = query.chars();
        loop {
            match (title.next(), query.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if chars_eq_ignore_case(a, b) => {}
                _ => return false,
            }
        }
    }

    /// Text shown in the detail pane once the book is selected.
    pub fn detail_text(&self) -> String {
        format!("Title: {}\nDetails: {}", self.title, self.details)
    }
}

/// Two characters are equal ignoring case when they match as-is, after upper
/// casing, or after lower casing.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

impl fmt::Display for Book {
    /// `Title by Author`, the rendering used for list entries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
