use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    /// Connection URL the pool was opened with; reported (password masked)
    /// by the diagnostics route.
    pub database_url: String,
}
