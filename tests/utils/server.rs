use axum_test::TestServer;
use webhook_message_service::api::routes::routes;
use webhook_message_service::api::server_state::ServerState;
use webhook_message_service::application::configuration::composed::Configuration;
use webhook_message_service::application::service::message_service::MessageService;

pub fn create_test_server(config: &Configuration, message_service: MessageService) -> TestServer {
    let state = ServerState::new(config.app().clone(), message_service);

    TestServer::new(routes(state)).unwrap()
}
