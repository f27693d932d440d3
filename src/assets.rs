// src/assets.rs
//! Static media for the "about" and Galton-board panels
//!
//! Assets are optional. A missing file is reported as
//! [`AssetStatus::Missing`] with a notice the page can show inline; it is
//! never an error for the caller.

use crate::error::LabError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    fn label(self) -> &'static str {
        match self {
            AssetKind::Image => "Image",
            AssetKind::Video => "Video file",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Loaded { kind: AssetKind, bytes: Vec<u8> },
    Missing { kind: AssetKind, notice: String },
}

impl AssetStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, AssetStatus::Loaded { .. })
    }

    /// Base64 payload for inline embedding, if the asset was found
    pub fn to_base64(&self) -> Option<String> {
        match self {
            AssetStatus::Loaded { bytes, .. } => Some(STANDARD.encode(bytes)),
            AssetStatus::Missing { .. } => None,
        }
    }
}

/// Read an asset, turning any I/O failure into an inline notice
pub fn load_asset(path: &Path, kind: AssetKind) -> AssetStatus {
    match fs::read(path) {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), len = bytes.len(), "asset loaded");
            AssetStatus::Loaded { kind, bytes }
        }
        Err(e) => {
            let err = LabError::AssetUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            };
            tracing::warn!(error = %err, "asset missing, showing notice instead");
            AssetStatus::Missing {
                kind,
                notice: format!("{} '{}' not found. Check the path and file name.", kind.label(), path.display()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_asset_is_a_notice() {
        let status = load_asset(Path::new("definitely/not/here.jpg"), AssetKind::Image);
        assert!(!status.is_loaded());
        assert!(status.to_base64().is_none());
        match status {
            AssetStatus::Missing { kind, notice } => {
                assert_eq!(kind, AssetKind::Image);
                assert!(notice.contains("here.jpg"));
            }
            AssetStatus::Loaded { .. } => panic!("expected missing asset"),
        }
    }

    #[test]
    fn test_loaded_asset_encodes_to_base64() {
        let path = std::env::temp_dir().join(format!("bs_lab_asset_{}.bin", std::process::id()));
        {
            let mut f = fs::File::create(&path).unwrap();
            f.write_all(b"hi").unwrap();
        }
        let status = load_asset(&path, AssetKind::Video);
        fs::remove_file(&path).ok();

        assert!(status.is_loaded());
        assert_eq!(status.to_base64().as_deref(), Some("aGk="));
    }
}
