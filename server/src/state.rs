use sqlx::SqlitePool;

/// Shared by every handler. The pool hands out one connection per query and
/// takes it back on every exit path.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
