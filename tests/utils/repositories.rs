use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use std::io;
use std::sync::Mutex;
use webhook_message_service::domain::error::MessageError;
use webhook_message_service::domain::repository::MessageRepository;

/// Keeps the message in memory, optionally failing every call.
pub struct InMemoryMessageRepository {
    content: Mutex<Option<String>>,
    failing: bool,
}

impl InMemoryMessageRepository {
    pub fn empty() -> Self {
        InMemoryMessageRepository {
            content: Mutex::new(None),
            failing: false,
        }
    }

    pub fn with_content(content: &str) -> Self {
        InMemoryMessageRepository {
            content: Mutex::new(Some(content.to_string())),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        InMemoryMessageRepository {
            content: Mutex::new(None),
            failing: true,
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), MessageError> {
        if self.failing {
            return Err(MessageError::Storage(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn read(&self) -> Result<Option<String>, MessageError> {
        self.check()?;

        Ok(self.stored())
    }

    async fn write(&self, content: &str) -> Result<(), MessageError> {
        self.check()?;
        *self.content.lock().unwrap() = Some(content.to_string());

        Ok(())
    }

    async fn exists(&self) -> Result<bool, MessageError> {
        self.check()?;

        Ok(self.stored().is_some())
    }

    async fn last_modified(&self) -> Result<DateTime<Local>, MessageError> {
        self.check()?;

        match self.stored() {
            Some(_) => Ok(Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 15).earliest().unwrap()),
            None => Err(MessageError::Storage(io::Error::from(io::ErrorKind::NotFound))),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
