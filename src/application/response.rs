// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::category::Category;
use crate::domain::models::pagination::Paginated;
use crate::domain::models::product::{Product, ProductWithCategory};
use crate::utils::errors::RepositoryError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 成功响应的默认消息
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
/// 失败响应的默认消息
pub const DEFAULT_ERROR_MESSAGE: &str = "Error";

/// 统一响应信封
///
/// 成功响应中 `error` 显式为 `null`；`data` 与 `meta` 缺省时不输出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// 使用默认消息构造成功响应
    pub fn success(data: T) -> Self {
        Self::success_with(data, DEFAULT_SUCCESS_MESSAGE, None)
    }

    pub fn success_with(data: T, message: impl Into<String>, meta: Option<Value>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            meta,
        }
    }

    pub fn error(message: impl Into<String>, error: Option<Value>, meta: Option<Value>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error,
            meta,
        }
    }

    /// 使用默认消息构造失败响应
    pub fn failed(error: Option<Value>) -> Self {
        Self::error(DEFAULT_ERROR_MESSAGE, error, None)
    }

    /// 由仓库错误构造失败响应，附带状态码提示
    pub fn from_repository_error(message: impl Into<String>, err: &RepositoryError) -> Self {
        Self::error(
            message,
            Some(json!({
                "statusCode": err.status_code(),
                "details": err.to_string(),
            })),
            None,
        )
    }
}

/// 转换为统一响应信封
///
/// 已经是信封的值原样返回，不会被二次包装。
pub trait IntoApiResponse {
    type Data;

    fn into_api_response(self) -> ApiResponse<Self::Data>;
}

impl<T> IntoApiResponse for ApiResponse<T> {
    type Data = T;

    fn into_api_response(self) -> ApiResponse<T> {
        self
    }
}

macro_rules! wrap_as_success {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoApiResponse for $ty {
                type Data = $ty;

                fn into_api_response(self) -> ApiResponse<$ty> {
                    ApiResponse::success(self)
                }
            }
        )*
    };
}

wrap_as_success!(Category, Product, ProductWithCategory, Value, ());

impl<T> IntoApiResponse for Paginated<T> {
    type Data = Paginated<T>;

    fn into_api_response(self) -> ApiResponse<Paginated<T>> {
        ApiResponse::success(self)
    }
}

impl<T> IntoApiResponse for Vec<T> {
    type Data = Vec<T>;

    fn into_api_response(self) -> ApiResponse<Vec<T>> {
        ApiResponse::success(self)
    }
}
