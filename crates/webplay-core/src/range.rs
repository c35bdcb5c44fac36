//! 1-based inclusive range selection over the matched URL list.

use thiserror::Error;

/// Malformed `range` argument. Surfaced to the user instead of panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("invalid range `{0}`: expected `N` or `N-M` with numeric bounds")]
    Malformed(String),
}

/// Parsed `N` or `N-M` selection, kept 1-based as the user typed it.
/// Clamping happens at slice time, once the list length is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelection {
    start: i64,
    end: Option<i64>,
}

impl RangeSelection {
    /// Parses `"N"` or `"N-M"`. Anything non-numeric is an explicit error.
    pub fn parse(s: &str) -> Result<Self, RangeParseError> {
        let malformed = || RangeParseError::Malformed(s.to_string());
        let trimmed = s.trim();
        if let Some((a, b)) = trimmed.split_once('-') {
            let start = a.trim().parse::<i64>().map_err(|_| malformed())?;
            let end = b.trim().parse::<i64>().map_err(|_| malformed())?;
            Ok(Self { start, end: Some(end) })
        } else {
            let start = trimmed.parse::<i64>().map_err(|_| malformed())?;
            Ok(Self { start, end: None })
        }
    }

    /// Clamped window over `items`.
    ///
    /// Both bounds clamp into the list: a start before the first element
    /// becomes the first, an end past the last becomes the last, and an
    /// out-of-range start also clamps to the last element. A bare `N` runs
    /// through the end of the list; an inverted window is empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if items.is_empty() {
            return items;
        }
        let last = items.len() as i64 - 1;
        let start = (self.start - 1).clamp(0, last) as usize;
        let end = match self.end {
            Some(e) => (e - 1).clamp(0, last) as usize,
            None => last as usize,
        };
        if start > end {
            return &items[0..0];
        }
        &items[start..=end]
    }
}

/// Applies an optional selection; `None` keeps the full list.
pub fn select<'a, T>(items: &'a [T], selection: Option<&RangeSelection>) -> &'a [T] {
    match selection {
        Some(range) => range.slice(items),
        None => items,
    }
}
