use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Mirrors `source` under `dest`, creating directories on demand and
/// overwriting existing destination files. Returns the number of files
/// copied. Partially copied trees are left in place on error; re-running
/// overwrites them wholesale.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory: {:?}", dest))?;

    let mut copied = 0;
    for entry in fs::read_dir(source)
        .with_context(|| format!("Failed to read directory: {:?}", source))?
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {:?}", source))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat entry: {:?}", entry.path()))?;

        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if file_type.is_dir() {
            copied += copy_tree(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!("Failed to copy {:?} to {:?}", src_path, dest_path)
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::copy(source, dest)
        .with_context(|| format!("Failed to copy {:?} to {:?}", source, dest))?;
    Ok(())
}
