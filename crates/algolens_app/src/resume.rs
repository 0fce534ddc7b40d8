// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ephemeral resume flag.
//!
//! A tiny RON file records which algorithm was selected last. It is a
//! one-shot key: the next launch reads it, deletes it and auto-resumes
//! that algorithm from scratch. Nothing else survives between sessions -
//! recorded state logs are always rebuilt.

use algolens_sort::algorithms::SortKind;
use std::fs;
use std::io;
use std::path::Path;

const RESUME_FILE: &str = "resume.ron";

/// Record the selected algorithm for the next launch
pub fn write_resume_flag(dir: &Path, kind: SortKind) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let text = ron::to_string(&kind).map_err(io::Error::other)?;
    fs::write(dir.join(RESUME_FILE), text)
}

/// Consume the resume flag, if one was left behind.
///
/// The flag is deleted as soon as it is read; a second call returns
/// `None`. A malformed flag is discarded with a warning.
pub fn take_resume_flag(dir: &Path) -> Option<SortKind> {
    let path = dir.join(RESUME_FILE);
    let text = fs::read_to_string(&path).ok()?;
    if let Err(error) = fs::remove_file(&path) {
        tracing::warn!(%error, "failed to clear resume flag");
    }
    match ron::from_str(&text) {
        Ok(kind) => Some(kind),
        Err(error) => {
            tracing::warn!(%error, "discarding malformed resume flag");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("algolens-tests")
            .join(format!("{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_flag_round_trips() {
        let dir = scratch_dir("round-trip");
        write_resume_flag(&dir, SortKind::Quick).unwrap();
        assert_eq!(take_resume_flag(&dir), Some(SortKind::Quick));
    }

    #[test]
    fn test_flag_is_consumed_once() {
        let dir = scratch_dir("consume-once");
        write_resume_flag(&dir, SortKind::Merge).unwrap();
        assert_eq!(take_resume_flag(&dir), Some(SortKind::Merge));
        assert_eq!(take_resume_flag(&dir), None);
    }

    #[test]
    fn test_missing_flag_is_none() {
        let dir = scratch_dir("missing");
        assert_eq!(take_resume_flag(&dir), None);
    }

    #[test]
    fn test_malformed_flag_is_discarded() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(RESUME_FILE), "not a sort kind").unwrap();
        assert_eq!(take_resume_flag(&dir), None);
        // and it is gone
        assert!(!dir.join(RESUME_FILE).exists());
    }
}
