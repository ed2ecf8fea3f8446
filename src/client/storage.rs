//! Where the client keeps its bearer token between runs.

use anyhow::Context;
use std::{
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

pub trait TokenStorage: Send + Sync {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str) -> anyhow::Result<()>;

    /// Drops every stored credential
    fn clear(&self);
}

/// Token kept in a plain file, one line
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn token(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) -> anyhow::Result<()> {
        std::fs::write(&self.path, token)
            .with_context(|| format!("failed to write token to {}", self.path.display()))
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to remove {}: {e}", self.path.display());
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) -> anyhow::Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clear() {
        let storage = MemoryTokenStorage::with_token("abc");
        assert_eq!(storage.token().as_deref(), Some("abc"));

        storage.clear();
        assert_eq!(storage.token(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = std::env::temp_dir().join(format!("pet-clinic-token-{}", uuid::Uuid::new_v4()));
        let storage = FileTokenStorage::new(&path);
        assert_eq!(storage.token(), None);

        storage.set_token("token-1\n").unwrap();
        assert_eq!(storage.token().as_deref(), Some("token-1"));

        storage.clear();
        assert!(!path.exists());
        storage.clear();
    }
}
