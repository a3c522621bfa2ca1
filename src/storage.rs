// Transient upload spool. Each upload gets its own directory keyed by a
// random identifier, never by the client-supplied filename, so concurrent
// uploads with identical names cannot race on the same path.

use crate::error::RfpLensError;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UploadSpool {
    root: PathBuf,
}

impl UploadSpool {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the uploaded bytes under a fresh per-request directory. The
    /// returned guard removes the directory when dropped, on every exit path.
    pub fn spool(&self, filename: &str, bytes: &[u8]) -> Result<SpooledUpload, RfpLensError> {
        let dir = self.root.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&dir)?;

        // Keep only the final path component of the client filename.
        let safe_name = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload");
        let path = dir.join(safe_name);

        if let Err(e) = fs::write(&path, bytes) {
            let _ = fs::remove_dir_all(&dir);
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "upload spooled");
        Ok(SpooledUpload { dir, path })
    }
}

/// Scoped handle to one spooled upload.
#[derive(Debug)]
pub struct SpooledUpload {
    dir: PathBuf,
    path: PathBuf,
}

impl SpooledUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Vec<u8>, RfpLensError> {
        Ok(fs::read(&self.path)?)
    }
}

impl Drop for SpooledUpload {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), error = %e, "failed to clean spooled upload");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_filename_gets_distinct_paths() {
        let root = tempfile::tempdir().unwrap();
        let spool = UploadSpool::new(root.path());

        let first = spool.spool("rfp.pdf", b"first upload").unwrap();
        let second = spool.spool("rfp.pdf", b"second upload").unwrap();

        assert_ne!(first.path(), second.path());
        assert_eq!(first.read().unwrap(), b"first upload");
        assert_eq!(second.read().unwrap(), b"second upload");
    }

    #[test]
    fn test_drop_cleans_up() {
        let root = tempfile::tempdir().unwrap();
        let spool = UploadSpool::new(root.path());

        let spooled = spool.spool("rfp.docx", b"bytes").unwrap();
        let dir = spooled.path().parent().unwrap().to_path_buf();
        assert!(dir.exists());

        drop(spooled);
        assert!(!dir.exists());
    }

    #[test]
    fn test_filename_is_reduced_to_final_component() {
        let root = tempfile::tempdir().unwrap();
        let spool = UploadSpool::new(root.path());

        let spooled = spool.spool("../../etc/rfp.pdf", b"bytes").unwrap();
        assert_eq!(
            spooled.path().file_name().and_then(|n| n.to_str()),
            Some("rfp.pdf")
        );
        assert!(spooled.path().starts_with(root.path()));
    }
}
