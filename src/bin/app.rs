use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio::signal;
use webhook_message_service::api::routes::routes;
use webhook_message_service::api::server_state::ServerState;
use webhook_message_service::application::configuration::composed::Configuration;
use webhook_message_service::application::service::message_service::{
    MessageService, create_message_service,
};
use webhook_message_service::infrastructure::repository::create_message_repository;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "🚀 Start the server")]
    Start,
    #[command(about = "Check that the message file is readable")]
    HealthCheck,
    #[command(about = "Print the current message")]
    GetMessage,
    #[command(about = "Replace the current message")]
    UpdateMessage {
        #[arg(short, long)]
        message: String,
    },
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let config = Configuration::default();
    let cli = Cli::parse();

    setup_logging(&config);

    debug_config(&config);

    let message_repository = create_message_repository(config.storage());
    let message_service = create_message_service(message_repository);

    if let Err(e) = message_service.initialize().await {
        tracing::error!(
            "Could not initialize message file {}: {}",
            message_service.location(),
            e
        );
    }

    match &cli.command {
        Some(Commands::Start) | None => start(&config, message_service).await,
        Some(Commands::HealthCheck) => match message_service.get_message().await {
            Ok(_) => {
                println!("healthy: {}", message_service.location());

                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("unhealthy: {}", e);

                ExitCode::FAILURE
            }
        },
        Some(Commands::GetMessage) => match message_service.get_message().await {
            Ok(message) => {
                println!("{}", message);
                println!(
                    "Last updated: {}",
                    message_service.get_last_modified().await
                );

                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("Error {}", e);

                ExitCode::FAILURE
            }
        },
        Some(Commands::UpdateMessage { message }) => {
            match message_service.update_message(message).await {
                Ok(_) => {
                    println!("Message updated: {}", message);

                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("Error {}", e);

                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn start(config: &Configuration, message_service: MessageService) -> ExitCode {
    let port = config.app().port();
    let host = config.app().host();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await;

    let state = ServerState::new(config.app().clone(), message_service);

    match listener {
        Ok(listener) => {
            tracing::info!("Server started at {}", &addr);
            if let Err(e) = axum::serve(listener, routes(state))
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                tracing::error!("Server error: {}", e);

                return ExitCode::FAILURE;
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to bind to port {}: {}", port, e);

            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(_) => tracing::info!("Received Ctrl+C, starting graceful shutdown"),
            Err(e) => {
                tracing::error!("Could not install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, starting graceful shutdown");
            }
            Err(e) => {
                tracing::error!("Could not install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn setup_logging(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_max_level(config.app().log_level())
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting webhook message service"
    );
}

fn debug_config(config: &Configuration) {
    let message = "Configuration loaded successfully";
    for (name, value) in config.envs() {
        tracing::debug!(message, env = name, value = %value);
    }
}
