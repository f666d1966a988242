//! Local disk storage for uploaded report files
//!
//! Files are written under a single root directory and exposed to clients
//! through a public URL prefix (e.g. `/reports/report-1740000000000-42.html`),
//! which the static file service maps back onto the same directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::core::error::{AppError, Result};
use crate::shared::constants::REPORT_FILE_PREFIX;

/// Local disk storage for report files
#[derive(Debug, Clone)]
pub struct ReportFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl ReportFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory (and parents) if it doesn't exist
    pub async fn ensure_dir_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Synthesize a collision-resistant stored name
    ///
    /// Format: `report-<unix millis>-<random>.<ext>`. Only the extension of
    /// the original name survives; without one the name has no dot suffix.
    pub fn generate_file_name(original_filename: Option<&str>) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..=1_000_000_000);
        let extension = original_filename
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        format!("{}{}-{}{}", REPORT_FILE_PREFIX, millis, suffix, extension)
    }

    /// Public URL path for a stored file name
    pub fn public_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix, file_name)
    }

    /// Map a public path back onto the storage directory
    ///
    /// Only the final path component is used, so a crafted path can never
    /// point outside the root.
    pub fn resolve_public_path(&self, public_path: &str) -> Option<PathBuf> {
        let relative = public_path
            .strip_prefix(&self.public_prefix)
            .unwrap_or(public_path);
        let file_name = Path::new(relative).file_name()?;
        Some(self.root.join(file_name))
    }

    /// Open a new file for an incoming upload
    ///
    /// The returned guard removes the file again when dropped uncommitted.
    pub async fn create(&self, original_filename: Option<&str>) -> Result<PendingUpload> {
        self.ensure_dir_exists().await?;

        let file_name = Self::generate_file_name(original_filename);
        let path = self.root.join(&file_name);
        let file = fs::File::create(&path).await?;

        debug!("Receiving upload into {}", path.display());

        Ok(PendingUpload {
            public_path: self.public_path(&file_name),
            path,
            file: Some(file),
            size: 0,
            committed: false,
        })
    }

    /// Delete the file behind a public path
    ///
    /// Returns `Ok(false)` when there was nothing to delete.
    pub async fn delete_by_public_path(&self, public_path: &str) -> Result<bool> {
        let Some(path) = self.resolve_public_path(public_path) else {
            warn!("Cannot resolve report file path: {}", public_path);
            return Ok(false);
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Report file deleted: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Report file already absent: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

/// A report file being written to disk
///
/// Until [`PendingUpload::commit`] is called the file is treated as
/// temporary and is deleted when the guard goes out of scope.
#[derive(Debug)]
pub struct PendingUpload {
    path: PathBuf,
    public_path: String,
    file: Option<fs::File>,
    size: u64,
    committed: bool,
}

impl PendingUpload {
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| AppError::Internal("Upload already finished".to_string()))?;
        file.write_all(chunk).await?;
        self.size += chunk.len() as u64;
        Ok(())
    }

    /// Flush and close the underlying file
    pub async fn finish(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().await?;
            file.sync_all().await?;
        }
        Ok(())
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Keep the file on disk and return its public path
    pub fn commit(mut self) -> String {
        self.committed = true;
        std::mem::take(&mut self.public_path)
    }
}

impl Drop for PendingUpload {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.file.take();
        // Drop cannot await; a single unlink of an unfinished upload is acceptable here.
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Discarded uncommitted upload {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to discard uncommitted upload {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
