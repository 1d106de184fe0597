use pairing_core::{ChangedFileSet, RepositoryFileSet, TreePair};

pub struct VerificationContext {
    pub pair: TreePair,
    pub repository_files: RepositoryFileSet,
    pub changed_files: ChangedFileSet,
}
