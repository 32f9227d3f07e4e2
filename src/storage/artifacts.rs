use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::crawler::models::Listing;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("output directory {}: {source}", .path.display())]
    OutputDir { path: PathBuf, source: io::Error },
    #[error("encoding item {id}: {source}")]
    Encode {
        id: String,
        source: serde_json::Error,
    },
    #[error("creating {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Filesystem-backed artifact store: one JSON file per item id, all
/// directly under a single output directory.
#[derive(Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Opens the store, creating the output directory if it is missing.
    /// Failure here is fatal to the run; per-item write failures are not.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, ArtifactError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| ArtifactError::OutputDir {
                path: dir.clone(),
                source,
            })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `listing` to `<dir>/<id>.json`, replacing any previous
    /// artifact under the same id. `Ok` means the full byte sequence was
    /// flushed; the error names the failing stage so the caller can log
    /// it and move on to the next item.
    pub async fn write_listing(
        &self,
        id: &str,
        listing: &Listing,
    ) -> Result<PathBuf, ArtifactError> {
        let body = encode_listing(id, listing)?;
        let path = self.dir.join(format!("{id}.json"));

        let mut file = fs::File::create(&path)
            .await
            .map_err(|source| ArtifactError::Create {
                path: path.clone(),
                source,
            })?;
        file.write_all(&body)
            .await
            .map_err(|source| ArtifactError::Write {
                path: path.clone(),
                source,
            })?;
        file.flush()
            .await
            .map_err(|source| ArtifactError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}

/// Serializes a listing in the artifact layout: the four fields in fixed
/// order, four-space indentation, no trailing newline. Other tooling
/// consumes these files, so the layout is a contract.
fn encode_listing(id: &str, listing: &Listing) -> Result<Vec<u8>, ArtifactError> {
    let mut body = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut body, formatter);
    listing
        .serialize(&mut serializer)
        .map_err(|source| ArtifactError::Encode {
            id: id.to_owned(),
            source,
        })?;
    Ok(body)
}
