use std::sync::Arc;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any `GqlError` converts via `?`.
///
/// Persistence failures are logged and then surfaced to the client with their
/// original message; this layer does no recovery of its own.
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Loader(Arc<sqlx::Error>),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                tracing::error!("Database error: {e}");
                write!(f, "Database error: {e}")
            }
            GqlError::Loader(e) => {
                tracing::error!("Database error while batch loading: {e}");
                write!(f, "Database error: {e}")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<Arc<sqlx::Error>> for GqlError {
    fn from(e: Arc<sqlx::Error>) -> Self {
        GqlError::Loader(e)
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Into<GqlError>`
/// into `async_graphql::Result<T>`.
///
/// Usage: `users::list(&state.db).await.gql()?`
pub trait ResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<GqlError>> ResultExt<T> for std::result::Result<T, E> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| {
            let err: GqlError = e.into();
            async_graphql::Error::from(err)
        })
    }
}
