//! Line search over a fetched document with neighboring-line context.
//!
//! The text is split on `\n` only; a `\r` left by CRLF input stays part of
//! the line. Every matching line yields one [`MatchContext`], in source
//! order.

use serde::Serialize;

/// A matching line together with its immediate neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchContext {
    /// 0-based index of the matching line.
    pub line_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl MatchContext {
    /// The one to three context lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.before
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.line.as_str()))
            .chain(self.after.as_deref())
    }
}

/// All match contexts of a search, ordered by line index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub matches: Vec<MatchContext>,
}

impl SearchResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchContext> {
        self.matches.iter()
    }

    /// Keep only the first `limit` matches.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.matches.truncate(limit);
        self
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a MatchContext;
    type IntoIter = std::slice::Iter<'a, MatchContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Find every line of `text` containing `query`.
///
/// With `case_insensitive`, both sides are lower-cased before comparison;
/// the returned context lines are always the original text. An empty query
/// matches every line.
#[must_use]
pub fn search(text: &str, query: &str, case_insensitive: bool) -> SearchResult {
    let lines: Vec<&str> = text.split('\n').collect();
    let query = if case_insensitive {
        query.to_lowercase()
    } else {
        query.to_string()
    };

    let matches = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            if case_insensitive {
                line.to_lowercase().contains(&query)
            } else {
                line.contains(&query)
            }
        })
        .map(|(i, line)| MatchContext {
            line_index: i,
            before: i.checked_sub(1).map(|prev| lines[prev].to_string()),
            line: (*line).to_string(),
            after: lines.get(i + 1).map(|next| (*next).to_string()),
        })
        .collect();

    SearchResult { matches }
}
