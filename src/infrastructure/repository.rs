use crate::application::configuration::storage::StorageConfiguration;
use crate::domain::repository::MessageRepository;
use crate::infrastructure::file_message_repository::FileMessageRepository;
use std::sync::Arc;

pub fn create_message_repository(config: &StorageConfiguration) -> Arc<dyn MessageRepository> {
    Arc::new(FileMessageRepository::new(config.message_file_path()))
}
