// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 分页请求DTO
///
/// 页码默认 1，每页条数默认 10
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct PaginationRequestDto {
    /// 页码，与 `limit` 的乘积保持在 i64 范围内
    #[validate(range(min = 1, max = 1000000000))]
    pub page: Option<u64>,

    /// 每页条数（最大 1000）
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
}

impl PaginationRequestDto {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl From<&PaginationRequestDto> for PageRequest {
    fn from(dto: &PaginationRequestDto) -> Self {
        PageRequest::new(dto.page, dto.limit)
    }
}
