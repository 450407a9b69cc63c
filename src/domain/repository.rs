use crate::domain::error::MessageError;
use async_trait::async_trait;
use chrono::{DateTime, Local};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Raw file content, `None` when the file does not exist.
    async fn read(&self) -> Result<Option<String>, MessageError>;
    async fn write(&self, content: &str) -> Result<(), MessageError>;
    async fn exists(&self) -> Result<bool, MessageError>;
    async fn last_modified(&self) -> Result<DateTime<Local>, MessageError>;
    fn location(&self) -> String;
}
