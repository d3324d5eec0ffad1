use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tracing::info;
use url::Url;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/diagnostics", get(diagnostics))
}

async fn welcome() -> &'static str {
    info!("GET / - Welcome");
    "Welcome to the CoreBank API"
}

async fn health() -> &'static str {
    info!("GET /health - Health check");
    "OK"
}

/// Reports the live connection parameters as labeled plain-text lines, one
/// per field. The password value is always masked; only its label is shown.
async fn diagnostics(State(state): State<AppState>) -> String {
    info!("GET /diagnostics - Reporting connection parameters");

    let (database, host, port, user, password_set) = match Url::parse(&state.database_url) {
        Ok(url) => (
            url.path().trim_start_matches('/').to_string(),
            url.host_str().unwrap_or("").to_string(),
            url.port().map(|p| p.to_string()).unwrap_or_default(),
            url.username().to_string(),
            url.password().is_some_and(|p| !p.is_empty()),
        ),
        // An unparseable URL may still embed credentials, so never echo it.
        Err(_) => (String::new(), String::new(), String::new(), String::new(), false),
    };
    let password = if password_set { "********" } else { "" };

    format!(
        "Hi! This is the CoreBank diagnostics endpoint.\n\
         Database URL:{database}\n\
         Database host:{host}\n\
         Database port:{port}\n\
         Database user:{user}\n\
         Database password:{password}\n"
    )
}
