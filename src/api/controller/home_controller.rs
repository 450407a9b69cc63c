use crate::api::server_state::ServerState;
use crate::domain::error::MessageError;
use axum::extract::State;
use axum::response::Html;

pub async fn home(State(state): State<ServerState>) -> Result<Html<String>, MessageError> {
    let message = state.message_service.snapshot().await?;

    Ok(Html(render_home(
        state.config.hostname(),
        state.config.environment(),
        &message.content,
        &message.last_modified_label(),
        &state.message_service.location(),
    )))
}

fn render_home(
    hostname: &str,
    environment: &str,
    message: &str,
    last_modified: &str,
    location: &str,
) -> String {
    format!(
        r#"<html>
    <head>
        <title>Webhook Test App</title>
        <style>
            body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
            .message {{ background: #f4f4f4; padding: 20px; border-radius: 5px; margin: 20px 0; }}
            .info {{ background: #e7f3ff; padding: 15px; border-radius: 5px; }}
            .container {{ border: 1px solid #ddd; padding: 20px; border-radius: 5px; margin: 10px 0; }}
        </style>
    </head>
    <body>
        <h1>🚀 Webhook Testing App (Docker/K8s)</h1>
        <div class="container">
            <div class="info">
                <strong>Pod/Container Info:</strong><br>
                Hostname: {hostname}<br>
                Environment: {environment}
            </div>
        </div>
        <div class="info">
            <strong>Current Message:</strong>
        </div>
        <div class="message">
            <h2>{message}</h2>
        </div>
        <div class="info">
            <p>To update this message, modify the <code>message.txt</code> file and trigger the webhook.</p>
            <p>Last updated: {last_modified}</p>
            <p>Message file: {location}</p>
        </div>
        <div class="container">
            <h3>API Endpoints:</h3>
            <ul>
                <li><a href="/api/message">/api/message</a> - Get message as JSON</li>
                <li><a href="/health">/health</a> - Health check</li>
            </ul>
        </div>
    </body>
</html>
"#,
        hostname = escape_html(hostname),
        environment = escape_html(environment),
        message = escape_html(message),
        last_modified = escape_html(last_modified),
        location = escape_html(location),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

