pub mod text_patch;
pub mod tree_copy;

pub use text_patch::apply_text_patch;
pub use tree_copy::{copy_file, copy_tree};
