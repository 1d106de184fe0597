use pairing_core::ChangeStatus;
use tracing::{debug, info};

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::verification::MirrorPair;

/// A modified source file whose mirror already exists must be changed
/// together with that mirror.
pub struct MirrorUpdateRule;

impl VerificationRule for MirrorUpdateRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) {
        let modified = context
            .changed_files
            .iter()
            .filter(|file| file.status == ChangeStatus::Modified);

        for file in modified {
            let Some(mirror) = context.pair.mirror_path(&file.path) else {
                continue;
            };

            if !context.repository_files.contains(&mirror) {
                debug!(source = %file.path, %mirror, "no mirror file in repository");
                continue;
            }

            info!(source = %file.path, %mirror, "found mirror file in repository");

            let pair = MirrorPair {
                source: file.path.clone(),
                mirror,
            };

            if context.changed_files.contains_path(&pair.mirror) {
                result.paired_updates.push(pair);
            } else {
                result.missing_mirror_updates.push(pair);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pairing_core::{ChangedFile, RepositoryFileSet, TreePair};

    use super::*;

    fn context(repository: &[&str], changed: Vec<ChangedFile>) -> VerificationContext {
        VerificationContext {
            pair: TreePair::default(),
            repository_files: repository.iter().copied().collect::<RepositoryFileSet>(),
            changed_files: changed.into_iter().collect(),
        }
    }

    fn run(context: &VerificationContext) -> VerificationResult {
        let mut result = VerificationResult::default();
        MirrorUpdateRule.check(context, &mut result);
        result
    }

    #[test]
    fn reports_untouched_existing_mirror() {
        let ctx = context(
            &[
                "feature/bgp/ate_tests/bgp_test/bgp_test.go",
                "feature/bgp/otg_tests/bgp_test/bgp_test.go",
            ],
            vec![ChangedFile::new(
                "feature/bgp/ate_tests/bgp_test/bgp_test.go",
                ChangeStatus::Modified,
            )],
        );

        let result = run(&ctx);

        assert_eq!(result.missing_mirror_updates.len(), 1);
        assert_eq!(
            result.missing_mirror_updates[0].mirror,
            "feature/bgp/otg_tests/bgp_test/bgp_test.go"
        );
        assert_eq!(
            result.missing_mirror_updates[0].source,
            "feature/bgp/ate_tests/bgp_test/bgp_test.go"
        );
    }

    #[test]
    fn accepts_mirror_changed_in_same_pull_request() {
        let ctx = context(
            &["a/ate_tests/x.go", "a/otg_tests/x.go"],
            vec![
                ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Modified),
                ChangedFile::new("a/otg_tests/x.go", ChangeStatus::Modified),
            ],
        );

        let result = run(&ctx);

        assert!(result.missing_mirror_updates.is_empty());
        assert_eq!(result.paired_updates.len(), 1);
    }

    #[test]
    fn accepts_mirror_changed_with_any_status() {
        let ctx = context(
            &["a/ate_tests/x.go", "a/otg_tests/x.go"],
            vec![
                ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Modified),
                ChangedFile::new("a/otg_tests/x.go", ChangeStatus::Removed),
            ],
        );

        let result = run(&ctx);

        assert!(result.missing_mirror_updates.is_empty());
    }

    #[test]
    fn ignores_source_without_existing_mirror() {
        let ctx = context(
            &["a/ate_tests/x.go"],
            vec![ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Modified)],
        );

        let result = run(&ctx);

        assert!(result.missing_mirror_updates.is_empty());
        assert!(result.paired_updates.is_empty());
    }

    #[test]
    fn ignores_statuses_other_than_modified() {
        let ctx = context(
            &["a/otg_tests/x.go"],
            vec![
                ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Removed),
                ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Renamed),
                ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Added),
                ChangedFile::new("a/ate_tests/x.go", ChangeStatus::Other),
            ],
        );

        let result = run(&ctx);

        assert!(result.missing_mirror_updates.is_empty());
    }

    #[test]
    fn mirror_tree_changes_need_no_source_counterpart() {
        let ctx = context(
            &["a/ate_tests/x.go", "a/otg_tests/x.go"],
            vec![ChangedFile::new("a/otg_tests/x.go", ChangeStatus::Modified)],
        );

        let result = run(&ctx);

        assert!(result.missing_mirror_updates.is_empty());
    }

    #[test]
    fn replaces_first_occurrence_only() {
        let ctx = context(
            &[
                "x/otg_tests/y/ate_tests/z.go",
                "x/otg_tests/y/otg_tests/z.go",
            ],
            vec![ChangedFile::new(
                "x/ate_tests/y/ate_tests/z.go",
                ChangeStatus::Modified,
            )],
        );

        let result = run(&ctx);

        assert_eq!(result.missing_mirror_updates.len(), 1);
        assert_eq!(
            result.missing_mirror_updates[0].mirror,
            "x/otg_tests/y/ate_tests/z.go"
        );
    }

    #[test]
    fn reports_every_offending_file() {
        let ctx = context(
            &["a/otg_tests/one.go", "b/otg_tests/two.go", "c/otg_tests/three.go"],
            vec![
                ChangedFile::new("a/ate_tests/one.go", ChangeStatus::Modified),
                ChangedFile::new("b/ate_tests/two.go", ChangeStatus::Modified),
                ChangedFile::new("c/ate_tests/three.go", ChangeStatus::Modified),
                ChangedFile::new("c/otg_tests/three.go", ChangeStatus::Modified),
            ],
        );

        let result = run(&ctx);

        let mirrors: Vec<&str> = result
            .missing_mirror_updates
            .iter()
            .map(|pair| pair.mirror.as_str())
            .collect();
        assert_eq!(mirrors, vec!["a/otg_tests/one.go", "b/otg_tests/two.go"]);
    }
}
