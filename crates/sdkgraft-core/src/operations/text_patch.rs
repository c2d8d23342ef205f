use crate::types::{PatchResult, TextPatch};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Applies a marker-guarded anchored insertion to a text file.
///
/// The marker check runs before anything is written, so re-running the same
/// patch against an already-patched file is a no-op. The anchor is a literal
/// substring and only its first occurrence is replaced; if it is absent the
/// file is left untouched and the step reports a failure instead of guessing
/// an insertion point.
pub fn apply_text_patch(
    path: &Path,
    patch: &TextPatch,
    dry_run: bool,
) -> Result<PatchResult> {
    if !path.exists() {
        log::warn!("patch target missing, skipping: {:?}", path);
        return Ok(PatchResult::SkippedMissingSource);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;

    if content.contains(&patch.marker) {
        return Ok(PatchResult::SkippedAlreadyApplied);
    }

    if !content.contains(&patch.anchor) {
        return Ok(PatchResult::Failed("anchor not found".to_string()));
    }

    if !dry_run {
        let updated = content.replacen(&patch.anchor, &patch.replacement, 1);
        fs::write(path, updated)
            .with_context(|| format!("Failed to write file: {:?}", path))?;
    }

    Ok(PatchResult::Applied)
}
