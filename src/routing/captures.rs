//! Capture groups handed to a handler operation.

use std::fmt;

/// Groups captured by the winning pattern.
///
/// Index 0 is the whole match; indexes from 1 are the pattern's groups in
/// order of their opening parenthesis. The trailing-slash suffix added during
/// normalization is not a group, but it is part of the whole match, so
/// `/page/7/` yields `"/page/7/"` at index 0.
pub struct Captures<'p> {
    inner: regex::Captures<'p>,
}

impl<'p> Captures<'p> {
    pub(crate) fn new(inner: regex::Captures<'p>) -> Self {
        Self { inner }
    }

    /// Text of group `i`, or `None` if the group does not exist or did not
    /// take part in the match.
    pub fn get(&self, i: usize) -> Option<&'p str> {
        self.inner.get(i).map(|m| m.as_str())
    }

    /// Text of the named group `(?P<name>...)`.
    pub fn name(&self, name: &str) -> Option<&'p str> {
        self.inner.name(name).map(|m| m.as_str())
    }

    /// The whole match.
    pub fn whole(&self) -> &'p str {
        self.get(0).unwrap_or_default()
    }

    /// Number of slots, including index 0, up to the last group that took
    /// part in the match.
    pub fn len(&self) -> usize {
        self.participating()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots in order, ending at the last participating group. Earlier groups
    /// that did not participate are `""`.
    pub fn iter(&self) -> impl Iterator<Item = &'p str> + '_ {
        self.inner
            .iter()
            .take(self.participating())
            .map(|m| m.map(|m| m.as_str()).unwrap_or_default())
    }

    /// Owned copy of [`Captures::iter`].
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl Captures<'_> {
    /// One past the index of the last group with a match.
    fn participating(&self) -> usize {
        (0..self.inner.len())
            .rev()
            .find(|&i| self.inner.get(i).is_some())
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
