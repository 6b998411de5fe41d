// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库层错误类型
///
/// 存储层错误在此统一归类，调用方只需匹配变体，无需识别具体的数据库错误码。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 记录未找到（更新或删除的目标不存在）
    #[error("Record not found")]
    NotFound,

    /// 约束冲突（外键无效、唯一键冲突等）
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// 其他数据库错误，原样透传
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl RepositoryError {
    /// 是否为未找到错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }

    /// 对应的HTTP状态码提示，供外部传输层渲染
    pub fn status_code(&self) -> u16 {
        match self {
            RepositoryError::NotFound => 404,
            RepositoryError::ConstraintViolation(_) => 409,
            RepositoryError::Database(_) => 500,
        }
    }
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepositoryError::NotFound,
            other => match other.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg))
                | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                    RepositoryError::ConstraintViolation(msg)
                }
                _ => RepositoryError::Database(other),
            },
        }
    }
}
