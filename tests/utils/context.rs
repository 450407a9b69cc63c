use axum_test::TestServer;
use std::path::PathBuf;
use std::sync::Arc;
use webhook_message_service::application::service::message_service::MessageService;
use webhook_message_service::domain::repository::MessageRepository;

pub struct AcceptanceTestContext {
    pub server: TestServer,
    pub message_service: MessageService,
    pub message_file: PathBuf,
}

impl AcceptanceTestContext {
    pub fn new(server: TestServer, message_service: MessageService, message_file: PathBuf) -> Self {
        AcceptanceTestContext {
            server,
            message_service,
            message_file,
        }
    }
}

pub struct StorageTestContext {
    pub repository: Arc<dyn MessageRepository>,
    pub message_file: PathBuf,
}

impl StorageTestContext {
    pub fn new(repository: Arc<dyn MessageRepository>, message_file: PathBuf) -> Self {
        StorageTestContext {
            repository,
            message_file,
        }
    }
}
