use crate::{CoreError, Result};

pub const DEFAULT_SOURCE_SEGMENT: &str = "ate_tests";
pub const DEFAULT_MIRROR_SEGMENT: &str = "otg_tests";

/// Two literal path substrings whose trees are kept in lockstep.
///
/// Matching is plain substring containment, not directory-segment matching:
/// `template_ate_tests_extra/foo` contains `ate_tests` and is treated as a
/// source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePair {
    source: String,
    mirror: String,
}

impl TreePair {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySegment`] if either segment is empty and
    /// [`CoreError::IdenticalSegments`] if both are the same string.
    pub fn new(source: impl Into<String>, mirror: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mirror = mirror.into();

        if source.is_empty() || mirror.is_empty() {
            return Err(CoreError::EmptySegment);
        }
        if source == mirror {
            return Err(CoreError::IdenticalSegments { segment: source });
        }

        Ok(Self { source, mirror })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn mirror(&self) -> &str {
        &self.mirror
    }

    #[must_use]
    pub fn is_source_path(&self, path: &str) -> bool {
        path.contains(&self.source)
    }

    /// Replaces the first occurrence of the source segment with the mirror
    /// segment. Returns `None` when the path does not contain the source.
    #[must_use]
    pub fn mirror_path(&self, path: &str) -> Option<String> {
        self.is_source_path(path)
            .then(|| path.replacen(&self.source, &self.mirror, 1))
    }
}

impl Default for TreePair {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_SEGMENT.to_string(),
            mirror: DEFAULT_MIRROR_SEGMENT.to_string(),
        }
    }
}
