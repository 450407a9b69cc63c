use crate::domain::error::MessageError;
use crate::domain::message::{INITIAL_MESSAGE, Message, format_last_modified};
use crate::domain::repository::MessageRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct MessageService {
    repository: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        MessageService { repository }
    }

    /// Current message, trimmed. Falls back to the default text when the file is missing.
    pub async fn get_message(&self) -> Result<String, MessageError> {
        let content = self.repository.read().await?;

        Ok(Message::from_stored(content, None).content)
    }

    /// Replaces the whole file with `content`, verbatim.
    pub async fn update_message(&self, content: &str) -> Result<(), MessageError> {
        self.repository.write(content).await?;
        tracing::info!(
            location = %self.repository.location(),
            length = content.len(),
            "Message updated"
        );

        Ok(())
    }

    /// File modification time as `YYYY-MM-DD HH:MM:SS`, or `Never` if it cannot be read.
    pub async fn get_last_modified(&self) -> String {
        format_last_modified(self.repository.last_modified().await.ok())
    }

    pub async fn snapshot(&self) -> Result<Message, MessageError> {
        let content = self.repository.read().await?;
        let last_modified = self.repository.last_modified().await.ok();

        Ok(Message::from_stored(content, last_modified))
    }

    /// Seeds the file with the initial message unless one already exists.
    /// Returns `true` when the file was written.
    pub async fn initialize(&self) -> Result<bool, MessageError> {
        if self.repository.exists().await? {
            tracing::info!(
                location = %self.repository.location(),
                "Found existing message file"
            );

            return Ok(false);
        }

        self.repository.write(INITIAL_MESSAGE).await?;
        tracing::info!(
            location = %self.repository.location(),
            "Created message file with initial message"
        );

        Ok(true)
    }

    pub fn location(&self) -> String {
        self.repository.location()
    }
}

pub fn create_message_service(repository: Arc<dyn MessageRepository>) -> MessageService {
    MessageService::new(repository)
}
