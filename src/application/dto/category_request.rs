// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::category::{CategoryChanges, NewCategory};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建分类请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateCategoryDto {
    /// 分类名称（必填）
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    /// 分类描述
    pub description: Option<String>,
}

/// 更新分类请求DTO，所有字段可选
///
/// `description` 传 `null` 时清空
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
