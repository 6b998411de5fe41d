// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::response::ApiResponse;
use crate::utils::errors::RepositoryError;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 用例模块
///
/// 每个用例完成一次完整的调用流程：校验输入、调用仓库、包装响应
pub mod category_use_case;
pub mod product_use_case;

/// 用例错误类型
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// 将仓库的 NotFound 转换为带实体名称的未找到错误
    pub(crate) fn not_found_as(entity: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |err| match err {
            RepositoryError::NotFound => UseCaseError::NotFound(entity),
            other => UseCaseError::Repository(other),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            UseCaseError::Validation(_) => 400,
            UseCaseError::NotFound(_) => 404,
            UseCaseError::Repository(err) => err.status_code(),
        }
    }

    /// 渲染为失败响应信封
    pub fn to_response<T>(&self) -> ApiResponse<T> {
        match self {
            UseCaseError::Repository(err) => {
                ApiResponse::from_repository_error(self.to_string(), err)
            }
            _ => ApiResponse::error(
                self.to_string(),
                Some(json!({ "statusCode": self.status_code() })),
                None,
            ),
        }
    }
}
