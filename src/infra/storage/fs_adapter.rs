use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use opendal::{ErrorKind, Operator, services};
use path_clean::PathClean;
use tracing::{debug, instrument};

use crate::domain::ports::IssueStore;
use crate::shared::errors::WhispererError;

/// Issue store backed by a local directory through opendal's fs service.
#[derive(Clone)]
pub struct LocalStore {
    root: PathBuf,
    op: Operator,
}

impl LocalStore {
    /// Validate the download directory and open a store rooted at it.
    ///
    /// `~` and environment variables are expanded, relative paths resolve against the
    /// current directory. A missing directory is a configuration error.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, WhispererError> {
        let root = resolve_dir(dir.as_ref())?;
        let root_as_str = root
            .to_str()
            .ok_or_else(|| WhispererError::InvalidDirectory(root.clone()))?;
        let builder = services::Fs::default().root(root_as_str);
        let op = Operator::new(builder)?.finish();
        debug!(root = %root.display(), "Opened download directory.");
        Ok(Self { root, op })
    }
}

fn resolve_dir(dir: &Path) -> Result<PathBuf, WhispererError> {
    let raw = dir.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .map_err(|_| WhispererError::InvalidDirectory(dir.to_path_buf()))?;
    let root = std::path::absolute(&*expanded)?.clean();
    if !root.is_dir() {
        return Err(WhispererError::InvalidDirectory(root));
    }
    Ok(root)
}

#[async_trait]
impl IssueStore for LocalStore {
    fn root(&self) -> &Path {
        &self.root
    }

    ///Asynchronous method to check if a file exists.
    #[instrument(name = "local_store_exists", skip(self))]
    async fn exists(&self, name: &str) -> Result<bool, WhispererError> {
        match self.op.stat(name).await {
            Ok(meta) => Ok(meta.mode().is_file()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Asynchronous method to write a buffer content to a file
    #[instrument(name = "local_store_write", skip(self, content), fields(bytes = content.len()))]
    async fn write(&self, name: &str, content: Bytes) -> Result<(), WhispererError> {
        self.op.write(name, content).await?;
        debug!("Wrote {name} to {}.", self.root.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_overwrite_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        assert!(!store.exists("DigitalWhisper1.pdf").await.unwrap());
        store.write("DigitalWhisper1.pdf", Bytes::from_static(b"first")).await.unwrap();
        assert!(store.exists("DigitalWhisper1.pdf").await.unwrap());

        store.write("DigitalWhisper1.pdf", Bytes::from_static(b"2nd")).await.unwrap();
        let on_disk = std::fs::read(dir.path().join("DigitalWhisper1.pdf")).unwrap();
        assert_eq!(on_disk, b"2nd");
    }

    #[tokio::test]
    async fn directories_do_not_count_as_existing_issues() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("DigitalWhisper2.pdf")).unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        assert!(!store.exists("DigitalWhisper2.pdf").await.unwrap());
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        match LocalStore::open(&missing) {
            Err(WhispererError::InvalidDirectory(path)) => assert_eq!(path, missing),
            other => panic!("expected InvalidDirectory, got {:?}", other.err()),
        }
    }

    #[test]
    fn root_is_absolute_and_clean() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("issues")).unwrap();
        let store = LocalStore::open(dir.path().join("issues/../issues/.")).unwrap();
        assert!(store.root().is_absolute());
        assert_eq!(store.root(), dir.path().join("issues"));
        assert_eq!(store.path_of("a.pdf"), dir.path().join("issues").join("a.pdf"));
    }
}
