//! Versioned state file with corruption detection
//!
//! State is serialized as a versioned JSON envelope carrying a checksum of
//! the payload. Writes go through a temp file followed by an atomic rename so
//! a crash mid-write never leaves a half-written state behind.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Corruption detected
    #[error("Corruption detected: {0}")]
    Corruption(String),

    /// Version mismatch
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Found version
        found: u32,
    },
}

/// Result type for state-file operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Envelope written to disk around the actual state payload
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    checksum: String,
    data: T,
}

impl<T: Serialize> Envelope<T> {
    fn new(version: u32, data: T) -> Result<Self> {
        let payload = serde_json::to_string(&data)?;
        let checksum = format!("{:x}", md5::compute(&payload));
        Ok(Self { version, checksum, data })
    }

    fn verify_checksum(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.data)?;
        let computed = format!("{:x}", md5::compute(&payload));
        if computed != self.checksum {
            return Err(StorageError::Corruption(format!(
                "checksum mismatch: expected {}, got {}",
                self.checksum, computed
            )));
        }
        Ok(())
    }
}

/// State-file configuration
#[derive(Debug, Clone)]
pub struct StateFileConfig {
    /// Path of the state file
    pub path: PathBuf,
    /// Current schema version
    pub version: u32,
}

impl StateFileConfig {
    /// Create a configuration for the given path with schema version 1
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), version: 1 }
    }

    /// Set the schema version
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

/// A versioned on-disk state file
///
/// Loading a missing file yields the type's `Default`; loading a corrupted or
/// wrong-version file is an explicit error so callers can decide whether to
/// reset or surface it.
#[derive(Debug, Clone)]
pub struct StateFile<T> {
    config: StateFileConfig,
    _marker: std::marker::PhantomData<T>,
}

impl<T> StateFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Create a state file handle
    pub fn new(config: StateFileConfig) -> Self {
        Self { config, _marker: std::marker::PhantomData }
    }

    /// Path this handle reads and writes
    pub fn path(&self) -> &std::path::Path {
        &self.config.path
    }

    /// Load the state from disk
    ///
    /// A missing file is not an error; it returns `T::default()`.
    pub async fn load(&self) -> Result<T> {
        let contents = match fs::read_to_string(&self.config.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.config.path.display(), "no state file, using defaults");
                return Ok(T::default());
            }
            Err(e) => return Err(e.into()),
        };

        let envelope: Envelope<T> = serde_json::from_str(&contents)?;
        envelope.verify_checksum()?;

        if envelope.version != self.config.version {
            return Err(StorageError::VersionMismatch {
                expected: self.config.version,
                found: envelope.version,
            });
        }

        Ok(envelope.data)
    }

    /// Write the state to disk atomically
    pub async fn save(&self, data: &T) -> Result<()>
    where
        T: Clone,
    {
        let envelope = Envelope::new(self.config.version, data.clone())?;
        let json = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = self.config.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.config.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.config.path).await?;
        debug!(path = %self.config.path.display(), "state saved");
        Ok(())
    }

    /// Remove the state file, if present
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.config.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
