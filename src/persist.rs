// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted-token slot.
//!
//! One token string, stored as a small versioned JSON file at a fixed path.
//! The file survives process restarts until explicit logout or a failed
//! token verification clears it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct PersistFile {
    version: u32,
    token: String,
}

/// Handle to the on-disk token file.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted token, if any.
    ///
    /// A missing, unreadable, or version-mismatched file all read as "no
    /// token"; a corrupt file is never fatal to session restore.
    pub fn load(&self) -> Option<String> {
        let data = fs::read(&self.path).ok()?;
        let pf: PersistFile = match serde_json::from_slice(&data) {
            Ok(pf) => pf,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt token file");
                return None;
            }
        };
        if pf.version != FILE_VERSION {
            return None;
        }
        Some(pf.token)
    }

    /// Write the token, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let pf = PersistFile {
            version: FILE_VERSION,
            token: token.to_string(),
        };
        let data = serde_json::to_vec_pretty(&pf)
            .map_err(|e| crate::error::ClientError::Malformed(e.to_string()))?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Remove the token file. Idempotent: a missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
