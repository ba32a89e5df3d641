//! Input discovery
//!
//! Collects the WAV files under the input directory in a deterministic order so
//! repeated runs over the same tree produce byte-identical manifests. Order is
//! lexicographic by forward-slash relative path. The configured output WAV is
//! excluded when it sits inside the input tree, otherwise a second run would
//! pack its own previous output.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One candidate input: absolute path plus its manifest clip name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Path relative to the input root, forward slashes.
    pub name: String,
}

/// Scan `input_dir` recursively for `.wav` files, skipping `exclude`.
pub fn scan(input_dir: &Path, exclude: &Path) -> Result<Vec<ScannedFile>> {
    let root = std::path::absolute(input_dir)
        .with_context(|| format!("Invalid input directory: {:?}", input_dir))?;
    let exclude = std::path::absolute(exclude).unwrap_or_else(|_| exclude.to_path_buf());

    let mut files = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry.with_context(|| format!("Failed to scan {:?}", root))?;
        if !entry.file_type().is_file() || !is_wav(entry.path()) {
            continue;
        }
        if same_file(entry.path(), &exclude) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(&root)
            .with_context(|| format!("Entry {:?} outside scan root {:?}", entry.path(), root))?;
        files.push(ScannedFile {
            path: entry.path().to_path_buf(),
            name: forward_slashes(relative),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    // Paths can spell the same file differently; resolve when both exist.
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_wavs_in_lexicographic_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("a.wav"));
        touch(&dir.path().join("sub/c.wav"));
        touch(&dir.path().join("notes.txt"));

        let files = scan(dir.path(), Path::new("/nonexistent/sounds.wav")).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.wav", "b.wav", "sub/c.wav"]);
    }

    #[test]
    fn extension_match_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("loud.WAV"));
        let files = scan(dir.path(), Path::new("/nonexistent/sounds.wav")).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn excludes_output_inside_input_tree() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.wav"));
        touch(&dir.path().join("sounds.wav"));

        let files = scan(dir.path(), &dir.path().join("sounds.wav")).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.wav"]);
    }

    #[test]
    fn missing_output_excludes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.wav"));
        let files = scan(dir.path(), &dir.path().join("sounds.wav")).unwrap();
        assert_eq!(files.len(), 1);
    }
}
