use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Value};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::storage::filename::{stamped_name, validate_name};

/// Counter suffixes tried after the plain timestamped name is taken.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// A resume document written by [`ResumeStore::save`].
#[derive(Debug, Clone)]
pub struct SavedFile {
    pub name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Local>,
}

/// Filesystem-backed resume persistence rooted at a single flat directory.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    dir: PathBuf,
}

impl ResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `resume` as 4-space indented JSON under a timestamped name derived from `base`.
    ///
    /// The file is opened create-new, so a save never replaces an existing
    /// file. A failed write may leave a truncated file behind.
    pub async fn save(
        &self,
        base: &str,
        resume: &Map<String, Value>,
    ) -> Result<SavedFile, AppError> {
        validate_name(base)?;
        let body = to_indented_json(resume).context("Failed to serialize resume")?;

        fs::create_dir_all(&self.dir).await?;

        let created_at = Local::now();
        let (name, path) = self.write_new(base, &created_at, &body).await?;
        let saved = SavedFile {
            name,
            path,
            created_at,
        };

        info!(
            file = %saved.path.display(),
            created_at = %saved.created_at.to_rfc3339(),
            bytes = body.len(),
            "Resume saved"
        );
        Ok(saved)
    }

    /// Returns the raw bytes of a previously saved file.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, AppError> {
        validate_name(name)?;
        let path = self.dir.join(name);

        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(file = %name, "Requested resume does not exist");
                Err(AppError::NotFound("File not found".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_new(
        &self,
        base: &str,
        created_at: &DateTime<Local>,
        body: &[u8],
    ) -> Result<(String, PathBuf), AppError> {
        for attempt in 0..=MAX_NAME_ATTEMPTS {
            let name = stamped_name(base, created_at, attempt);
            validate_name(&name)?;
            let path = self.dir.join(&name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            file.write_all(body).await?;
            file.flush().await?;
            return Ok((name, path));
        }

        Err(AppError::Internal(anyhow!(
            "No free file name for '{base}' after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }
}

/// Pretty JSON with 4-space indentation. Non-ASCII text is written as-is.
fn to_indented_json(value: &impl Serialize) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
