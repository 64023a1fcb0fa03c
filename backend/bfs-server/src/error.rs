use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] bfs_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] bfs_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] bfs_auth::AuthError),

    #[error("Template error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics error: {message}")]
    Metrics { message: String },

    #[error("Monitoring error: {message}")]
    Monitoring { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
