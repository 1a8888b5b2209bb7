use ahash::RandomState;
use std::collections::HashMap;
use tracing::warn;

/// Names that don't split as "first last".
pub const DEFAULT_NAME_OVERRIDES: &[(&str, &str, &str)] = &[("Min Woo Lee", "Min Woo", "Lee")];

/// Resolves a roster name to the (first, last) pair the leaderboard keys on.
///
/// The override table is consulted before the generic splitter, so adding an
/// entry is enough to fix a name that doesn't split on its first space.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    overrides: HashMap<String, (String, String), RandomState>,
}

impl Default for NameMatcher {
    fn default() -> Self {
        let mut overrides = HashMap::with_hasher(RandomState::new());
        for (full, first, last) in DEFAULT_NAME_OVERRIDES {
            overrides.insert(
                (*full).to_string(),
                ((*first).to_string(), (*last).to_string()),
            );
        }
        Self { overrides }
    }
}

impl NameMatcher {
    /// Built-in overrides extended (or replaced, on a clash) by `extra`.
    #[must_use]
    pub fn with_overrides<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = (S, (S, S))>,
        S: Into<String>,
    {
        let mut matcher = Self::default();
        for (full, (first, last)) in extra {
            matcher.add_override(full, first, last);
        }
        matcher
    }

    pub fn add_override(
        &mut self,
        full_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) {
        self.overrides
            .insert(full_name.into(), (first_name.into(), last_name.into()));
    }

    /// Returns `None` (and logs) when the name has no space to split on.
    #[must_use]
    pub fn split_name<'a>(&'a self, full_name: &'a str) -> Option<(&'a str, &'a str)> {
        let name = full_name.trim();
        if let Some((first, last)) = self.overrides.get(name) {
            return Some((first.as_str(), last.as_str()));
        }
        match name.split_once(' ') {
            Some((first, last)) if !first.is_empty() && !last.is_empty() => Some((first, last)),
            _ => {
                warn!("Skipping invalid name: {full_name:?}");
                None
            }
        }
    }
}
