mod diff_lister;
mod tree_lister;

pub use diff_lister::DiffLister;
pub use tree_lister::TreeLister;
