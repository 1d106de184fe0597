mod mirror_update;
mod new_source_file;

pub use mirror_update::MirrorUpdateRule;
pub use new_source_file::NewSourceFileRule;

use super::{VerificationContext, VerificationResult};

pub trait VerificationRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult);
}
