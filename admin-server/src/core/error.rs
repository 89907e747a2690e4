use thiserror::Error;

use crate::db::repository::RepoError;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RepoError> for ServerError {
    fn from(err: RepoError) -> Self {
        ServerError::Database(err.to_string())
    }
}

impl From<surrealdb::Error> for ServerError {
    fn from(err: surrealdb::Error) -> Self {
        ServerError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
