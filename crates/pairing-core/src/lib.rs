pub mod error;
mod path;
pub mod types;

pub use error::*;
pub use path::{DEFAULT_MIRROR_SEGMENT, DEFAULT_SOURCE_SEGMENT, TreePair};
pub use types::*;
