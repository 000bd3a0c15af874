//! Line-level view of a properties file.
//!
//! A line is an assignment when, after dropping everything from the first
//! unescaped `#` and trimming, it has a non-empty key before the first
//! unescaped `=`. A backslash escapes the following character, so `\#` and
//! `\=` are literal. Keys and values are kept as written, escapes included.

const COMMENT: char = '#';
const SEPARATOR: char = '=';
const ESCAPE: char = '\\';

/// One physical line of a properties file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyLine<'a> {
    /// `key = value`, with the original text retained.
    Assignment { key: &'a str, value: &'a str, raw: &'a str },
    /// Comment, blank or malformed line, copied verbatim.
    Passthrough(&'a str),
}

impl<'a> PropertyLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let content = match find_unescaped(raw, COMMENT) {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        let content = content.trim();

        let Some(eq) = find_unescaped(content, SEPARATOR) else {
            return PropertyLine::Passthrough(raw);
        };

        let key = content[..eq].trim_end();
        if key.is_empty() {
            return PropertyLine::Passthrough(raw);
        }
        let value = content[eq + SEPARATOR.len_utf8()..].trim_start();

        PropertyLine::Assignment { key, value, raw }
    }

    /// The line exactly as read.
    pub fn raw(&self) -> &'a str {
        match self {
            PropertyLine::Assignment { raw, .. } | PropertyLine::Passthrough(raw) => raw,
        }
    }
}

/// Canonical written form of an assignment.
pub fn format_assignment(key: &str, value: &str) -> String {
    format!("{}{}{}", key, SEPARATOR, value)
}

/// Whether `key` reads back as exactly `key` once written as an assignment.
pub fn is_readable_key(key: &str) -> bool {
    if key.contains(['\n', '\r']) {
        return false;
    }
    let line = format_assignment(key, "");
    match PropertyLine::parse(&line) {
        PropertyLine::Assignment { key: parsed, .. } => parsed == key,
        PropertyLine::Passthrough(_) => false,
    }
}

fn find_unescaped(s: &str, target: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else if c == target {
            return Some(idx);
        }
    }
    None
}
