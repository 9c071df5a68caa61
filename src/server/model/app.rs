use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// The connection handle is created once in `main` and cloned into each
/// request; clones share the same underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Shared database connection
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
