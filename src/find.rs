//! Find and replace over a document's plain text
//!
//! Matches are reported as char offsets. `find_all` returns standard
//! non-overlapping matches: scanning resumes at the end of each hit, so
//! `"aa"` searched for `"a"` yields offsets 0 and 1. Empty matches are
//! never reported. A whole-word match must not touch a letter, digit or
//! underscore on either side, so queries that start or end with punctuation
//! still match.

use std::fmt;

use regex::{Captures, Regex, RegexBuilder};

use crate::model::Document;

/// Options for one find session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match letter case exactly
    pub case_sensitive: bool,
    /// Only match whole words
    pub whole_word: bool,
    /// Treat the query as a regular expression instead of literal text
    pub regex: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
            regex: false,
        }
    }
}

/// A match as a half-open char range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// Errors reported to the user by find/replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindError {
    /// No search text was given
    EmptyQuery,
    /// Replace requires replacement text
    EmptyReplacement,
    /// The query does not occur in the document
    NoMatch(String),
    /// The query is not a valid regular expression
    InvalidPattern(String),
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "Nothing to search for"),
            Self::EmptyReplacement => write!(f, "Nothing to replace with"),
            Self::NoMatch(query) => write!(f, "'{}' not found", query),
            Self::InvalidPattern(msg) => write!(f, "Invalid search pattern: {}", msg),
        }
    }
}

impl std::error::Error for FindError {}

/// Outcome of a replace-all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Number of matches replaced
    pub replacements: usize,
    /// False if the old cursor no longer fit the new text and was clamped
    pub cursor_restored: bool,
}

/// Compile the query into a regex honouring `options`
pub fn build_pattern(needle: &str, options: &SearchOptions) -> Result<Regex, FindError> {
    if needle.is_empty() {
        return Err(FindError::EmptyQuery);
    }

    let body = if options.regex {
        needle.to_string()
    } else {
        regex::escape(needle)
    };

    RegexBuilder::new(&body)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|e| FindError::InvalidPattern(e.to_string()))
}

/// Find every non-overlapping occurrence of `needle` in `text`
pub fn find_all(text: &str, needle: &str, options: &SearchOptions) -> Result<Vec<Match>, FindError> {
    let re = build_pattern(needle, options)?;
    let mut results = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for caps in hits(&re, text, options.whole_word) {
        let Some(m) = caps.get(0) else { continue };
        char_pos += text[byte_pos..m.start()].chars().count();
        let len = m.as_str().chars().count();
        results.push(Match {
            start: char_pos,
            end: char_pos + len,
        });
        char_pos += len;
        byte_pos = m.end();
    }
    Ok(results)
}

/// Non-overlapping, non-empty matches in byte order.
///
/// A rejected candidate resumes the scan one char after its start, so a
/// whole-word hit hiding inside a longer rejected one is still found.
fn hits<'h>(re: &Regex, text: &'h str, whole_word: bool) -> Vec<Captures<'h>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(m) = caps.get(0) else { break };
        if m.is_empty() || (whole_word && !stands_alone(text, m.start(), m.end())) {
            pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            continue;
        }
        pos = m.end();
        found.push(caps);
    }
    found
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if the byte range has no word char directly before or after it
fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// State of the find/replace panel
#[derive(Debug, Clone, Default)]
pub struct FindSession {
    /// Search query
    pub query: String,
    /// Replacement text
    pub replacement: String,
    pub options: SearchOptions,
    /// Start offset of the last reported match
    pub last_match: Option<usize>,
}

impl FindSession {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Change the query; the next search starts from the cursor again
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.last_match = None;
    }

    pub fn set_replacement(&mut self, replacement: impl Into<String>) {
        self.replacement = replacement.into();
    }

    /// Find the next match after the last one, wrapping to the first.
    ///
    /// The first search of a session starts at the cursor. The cursor is
    /// moved to the end of the match.
    pub fn find_next(&mut self, document: &mut Document) -> Result<Match, FindError> {
        let text = document.text();
        let matches = find_all(&text, &self.query, &self.options)?;
        let Some(first) = matches.first().copied() else {
            return Err(FindError::NoMatch(self.query.clone()));
        };

        let next = match self.last_match {
            Some(last) => matches.iter().find(|m| m.start > last),
            None => matches.iter().find(|m| m.start >= document.cursor),
        }
        .copied()
        .unwrap_or(first);

        self.last_match = Some(next.start);
        document.set_cursor(next.end);
        tracing::debug!(query = %self.query, start = next.start, "find next");
        Ok(next)
    }

    /// Replace every match in one pass and record a single undo snapshot
    pub fn replace_all(&mut self, document: &mut Document) -> Result<ReplaceOutcome, FindError> {
        if self.query.is_empty() {
            return Err(FindError::EmptyQuery);
        }
        if self.replacement.is_empty() {
            return Err(FindError::EmptyReplacement);
        }

        let re = build_pattern(&self.query, &self.options)?;
        let text = document.text();
        let found = hits(&re, &text, self.options.whole_word);
        let replacements = found.len();
        if replacements == 0 {
            return Err(FindError::NoMatch(self.query.clone()));
        }

        // `$` groups expand only in regex mode
        let mut replaced = String::with_capacity(text.len());
        let mut last = 0;
        for caps in &found {
            let Some(m) = caps.get(0) else { continue };
            replaced.push_str(&text[last..m.start()]);
            if self.options.regex {
                caps.expand(&self.replacement, &mut replaced);
            } else {
                replaced.push_str(&self.replacement);
            }
            last = m.end();
        }
        replaced.push_str(&text[last..]);

        let cursor_restored = document.cursor <= replaced.chars().count();
        document.set_content(&replaced);
        self.last_match = None;

        tracing::debug!(query = %self.query, replacements, "replace all");
        Ok(ReplaceOutcome {
            replacements,
            cursor_restored,
        })
    }
}
