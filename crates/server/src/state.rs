use sea_orm::DatabaseConnection;

/// Shared handler state. The connection pool is the only shared resource;
/// handlers themselves are stateless.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
