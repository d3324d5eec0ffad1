/// Runtime configuration resolved from the environment.
///
/// `ENV=local` (the default) runs against SQLite so the service can start
/// without a database server; any other environment builds a PostgreSQL URL
/// from the individual `DB*` variables. `DATABASE_URL` overrides both.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = std::env::var("ENV").unwrap_or_else(|_| "local".to_string());

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            if environment == "local" {
                "sqlite:corebank.db?mode=rwc".to_string()
            } else {
                let user = std::env::var("DBUSER").unwrap_or_default();
                let pass = std::env::var("DBPASS").unwrap_or_default();
                let host = std::env::var("DBHOST").unwrap_or_else(|_| "localhost".to_string());
                let port = std::env::var("DBPORT").unwrap_or_else(|_| "5432".to_string());
                let name = std::env::var("DBNAME").unwrap_or_else(|_| "corebank".to_string());
                format!("postgres://{}:{}@{}:{}/{}", user, pass, host, port, name)
            }
        });

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            environment,
            database_url,
            port,
        }
    }
}
