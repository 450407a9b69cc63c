use crate::application::configuration::app::AppConfiguration;
use crate::application::service::message_service::MessageService;

#[derive(Clone)]
pub struct ServerState {
    pub config: AppConfiguration,
    pub message_service: MessageService,
}

impl ServerState {
    pub fn new(config: AppConfiguration, message_service: MessageService) -> Self {
        ServerState {
            config,
            message_service,
        }
    }
}
