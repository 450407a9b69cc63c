use crate::domain::error::MessageError;
use crate::domain::repository::MessageRepository;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Keeps the message in a single plain text file. Nothing is cached and
/// nothing is locked, so concurrent writers race and the last one wins.
pub struct FileMessageRepository {
    path: PathBuf,
}

impl FileMessageRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileMessageRepository { path: path.into() }
    }
}

#[async_trait]
impl MessageRepository for FileMessageRepository {
    async fn read(&self) -> Result<Option<String>, MessageError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!("Could not read message file {}: {}", self.path.display(), e);

                Err(MessageError::Storage(e))
            }
        }
    }

    async fn write(&self, content: &str) -> Result<(), MessageError> {
        if let Err(e) = fs::write(&self.path, content).await {
            tracing::error!("Could not write message file {}: {}", self.path.display(), e);

            return Err(MessageError::Storage(e));
        }

        Ok(())
    }

    async fn exists(&self) -> Result<bool, MessageError> {
        Ok(fs::try_exists(&self.path).await?)
    }

    async fn last_modified(&self) -> Result<DateTime<Local>, MessageError> {
        let modified = fs::metadata(&self.path).await?.modified()?;

        Ok(DateTime::<Local>::from(modified))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
