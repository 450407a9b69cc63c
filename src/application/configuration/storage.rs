use std::collections::HashMap;
use std::env;

pub struct StorageConfigurationBuilder {
    pub message_file_path: Option<String>,
}

impl StorageConfigurationBuilder {
    pub fn new() -> Self {
        StorageConfigurationBuilder {
            message_file_path: None,
        }
    }

    pub fn message_file_path(&mut self, value: String) -> &mut Self {
        self.message_file_path = Some(value);
        self
    }

    pub fn load_env(&mut self) -> &mut Self {
        self.message_file_path = env::var(EnvNames::MESSAGE_FILE_PATH).ok();

        self
    }

    pub fn build(&self) -> StorageConfiguration {
        StorageConfiguration {
            message_file_path: self
                .message_file_path
                .clone()
                .unwrap_or("message.txt".to_string()),
        }
    }
}

impl Default for StorageConfigurationBuilder {
    fn default() -> Self {
        StorageConfigurationBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfiguration {
    message_file_path: String,
}

impl StorageConfiguration {
    pub fn message_file_path(&self) -> &str {
        &self.message_file_path
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();

        envs.insert(
            EnvNames::MESSAGE_FILE_PATH.to_owned(),
            self.message_file_path.clone(),
        );

        envs
    }
}

pub struct EnvNames;

impl EnvNames {
    pub const MESSAGE_FILE_PATH: &'static str = "MESSAGE_FILE_PATH";
}
