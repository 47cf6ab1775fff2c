//! ROM file discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Expand command-line paths into ROM files.
///
/// Files are taken as given, whatever their extension. Directories are
/// listed (not recursively) and filtered by `extensions`; their entries
/// come out sorted.
pub fn collect_rom_files(
    paths: &[PathBuf],
    extensions: &[String],
) -> std::io::Result<Vec<PathBuf>> {
    let extensions = extension_set(extensions);
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(collect_matching_files(path, &extensions)?);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

/// Lowercased extension set, leading dots removed.
pub fn extension_set(extensions: &[String]) -> HashSet<String> {
    extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect()
}

/// Check if a path has an extension in the allowed set.
fn has_matching_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e.to_lowercase()))
        .unwrap_or(false)
}

/// Collect all files with matching extensions from a directory (sorted).
fn collect_matching_files(
    dir: &Path,
    extensions: &HashSet<String>,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|path| path.is_file() && has_matching_extension(path, extensions))
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
