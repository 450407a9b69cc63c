use chrono::{DateTime, Local};

pub const FALLBACK_MESSAGE: &str = "Hello! Webhook test is working! 🚀 Initial deployment.";
pub const INITIAL_MESSAGE: &str = "Hello! Webhook test is working! 🚀 Third time deployment.";
pub const NEVER_MODIFIED: &str = "Never";

const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A snapshot of the message file: its content and when it was last written.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub content: String,
    pub last_modified: Option<DateTime<Local>>,
}

impl Message {
    /// Builds a message from raw file content. A missing file yields the fallback text.
    pub fn from_stored(content: Option<String>, last_modified: Option<DateTime<Local>>) -> Self {
        let content = match content {
            Some(content) => content.trim().to_string(),
            None => FALLBACK_MESSAGE.to_string(),
        };

        Message {
            content,
            last_modified,
        }
    }

    pub fn last_modified_label(&self) -> String {
        format_last_modified(self.last_modified)
    }
}

pub fn format_last_modified(last_modified: Option<DateTime<Local>>) -> String {
    match last_modified {
        Some(time) => time.format(LAST_MODIFIED_FORMAT).to_string(),
        None => NEVER_MODIFIED.to_string(),
    }
}
