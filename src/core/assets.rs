//! Comparison image installation
//!
//! Copies a directory of comparison images (`veggie/week_N.png`,
//! `dad/week_N.png`) into a web-served directory so the image paths the
//! sensors report resolve. An existing destination is left untouched.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// What an install run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Source directory does not exist; nothing to copy
    SourceMissing,
    /// Destination already exists; nothing copied
    AlreadyPresent,
    /// Number of files copied
    Installed(usize),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

/// Copy `source` into `dest` unless `dest` already exists
pub fn install_images(source: &Path, dest: &Path) -> Result<InstallOutcome, AssetError> {
    if !source.is_dir() {
        tracing::warn!("Bundled images not found at {}", source.display());
        return Ok(InstallOutcome::SourceMissing);
    }
    tracing::debug!("Bundled images found at {}", source.display());

    if dest.exists() {
        tracing::debug!("Images already exist at {}", dest.display());
        return Ok(InstallOutcome::AlreadyPresent);
    }

    tracing::info!("Copying images to {}", dest.display());
    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| AssetError::Walk {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| AssetError::Walk {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| AssetError::CreateDir {
                path: target.clone(),
                source,
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| AssetError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
            copied += 1;
        }
    }

    tracing::info!("Copied {} image file(s)", copied);
    Ok(InstallOutcome::Installed(copied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source() {
        let tmp = TempDir::new().unwrap();
        let outcome = install_images(&tmp.path().join("missing"), &tmp.path().join("www")).unwrap();
        assert_eq!(outcome, InstallOutcome::SourceMissing);
        assert!(!tmp.path().join("www").exists());
    }

    #[test]
    fn test_copies_tree_once() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("images");
        fs::create_dir_all(source.join("veggie")).unwrap();
        fs::create_dir_all(source.join("dad")).unwrap();
        fs::write(source.join("veggie/week_1.png"), b"png").unwrap();
        fs::write(source.join("dad/week_1.png"), b"png").unwrap();

        let dest = tmp.path().join("www/pregnancy_tracker");
        assert_eq!(install_images(&source, &dest).unwrap(), InstallOutcome::Installed(2));
        assert!(dest.join("veggie/week_1.png").is_file());
        assert!(dest.join("dad/week_1.png").is_file());

        assert_eq!(install_images(&source, &dest).unwrap(), InstallOutcome::AlreadyPresent);
    }
}
