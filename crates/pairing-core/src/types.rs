use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// How a pull request touched a file, as reported by the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Copied,
    Modified,
    Removed,
    Renamed,
    /// Any status the pairing rules do not act on (`changed`, `unchanged`, ...).
    #[serde(other)]
    Other,
}

impl ChangeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Copied => "copied",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Renamed => "renamed",
            Self::Other => "other",
        }
    }

    /// Added or copied: the file did not exist at its path before the change.
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::Added | Self::Copied)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangedFile {
    pub path: String,
    pub status: ChangeStatus,
}

impl ChangedFile {
    #[must_use]
    pub fn new(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Every file a pull request touches, with path lookup.
#[derive(Debug, Clone, Default)]
pub struct ChangedFileSet {
    files: Vec<ChangedFile>,
    paths: HashSet<String>,
}

impl ChangedFileSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: ChangedFile) {
        self.paths.insert(file.path.clone());
        self.files.push(file);
    }

    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChangedFile> {
        self.files.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<ChangedFile> for ChangedFileSet {
    fn from_iter<I: IntoIterator<Item = ChangedFile>>(iter: I) -> Self {
        let mut set = Self::new();
        for file in iter {
            set.push(file);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ChangedFileSet {
    type Item = &'a ChangedFile;
    type IntoIter = std::slice::Iter<'a, ChangedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Every file path present at one repository reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFileSet(HashSet<String>);

impl RepositoryFileSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RepositoryFileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepositoryRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidRepository {
            value: s.to_string(),
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// What to do with files newly added or copied into the source tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum NewFilePolicy {
    /// Report every new source file in one warning.
    #[default]
    Warn,
    /// Report every new source file in one failure.
    Deny,
    /// Do not report new source files.
    Allow,
}

impl fmt::Display for NewFilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Warn => "warn",
            Self::Deny => "deny",
            Self::Allow => "allow",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_status_deserializes_known_values() {
        let statuses: Vec<ChangeStatus> =
            serde_json::from_str(r#"["added","copied","modified","removed","renamed"]"#)
                .expect("should deserialize");

        assert_eq!(
            statuses,
            vec![
                ChangeStatus::Added,
                ChangeStatus::Copied,
                ChangeStatus::Modified,
                ChangeStatus::Removed,
                ChangeStatus::Renamed,
            ]
        );
    }

    #[test]
    fn change_status_deserializes_unknown_as_other() {
        let statuses: Vec<ChangeStatus> =
            serde_json::from_str(r#"["changed","unchanged"]"#).expect("should deserialize");

        assert_eq!(statuses, vec![ChangeStatus::Other, ChangeStatus::Other]);
    }

    #[test]
    fn only_added_and_copied_are_new() {
        assert!(ChangeStatus::Added.is_new());
        assert!(ChangeStatus::Copied.is_new());
        assert!(!ChangeStatus::Modified.is_new());
        assert!(!ChangeStatus::Renamed.is_new());
        assert!(!ChangeStatus::Removed.is_new());
        assert!(!ChangeStatus::Other.is_new());
    }

    #[test]
    fn changed_file_set_tracks_paths() {
        let set: ChangedFileSet = vec![
            ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Modified),
            ChangedFile::new("a/otg_tests/x.go", ChangeStatus::Removed),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains_path("a/otg_tests/x.go"));
        assert!(!set.contains_path("a/otg_tests/y.go"));
    }

    #[test]
    fn repository_file_set_deduplicates() {
        let files: RepositoryFileSet = ["a.go", "b.go", "a.go"].into_iter().collect();

        assert_eq!(files.len(), 2);
        assert!(files.contains("a.go"));
    }

    #[test]
    fn repository_ref_parses_owner_and_name() {
        let repo: RepositoryRef = "openconfig/featureprofiles".parse().expect("valid slug");

        assert_eq!(repo.owner, "openconfig");
        assert_eq!(repo.name, "featureprofiles");
        assert_eq!(repo.to_string(), "openconfig/featureprofiles");
    }

    #[test]
    fn repository_ref_rejects_malformed_values() {
        for value in ["", "owner", "/name", "owner/", "a/b/c"] {
            assert!(
                value.parse::<RepositoryRef>().is_err(),
                "expected '{value}' to be rejected"
            );
        }
    }

    #[test]
    fn new_file_policy_defaults_to_warn() {
        assert_eq!(NewFilePolicy::default(), NewFilePolicy::Warn);
        assert_eq!(NewFilePolicy::Deny.to_string(), "deny");
    }
}
