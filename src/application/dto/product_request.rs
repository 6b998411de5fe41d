// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::product::{NewProduct, ProductChanges};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 创建商品请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateProductDto {
    /// 商品名称（必填）
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    pub description: Option<String>,

    /// 价格，不能为负
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// 库存，不能为负；缺省表示未设置
    #[validate(range(min = 0))]
    pub stock: Option<i32>,

    pub image_url: Option<String>,

    /// 所属分类ID，有效性由存储层的外键约束保证
    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,

    pub group_item: Option<String>,
}

/// 更新商品请求DTO，所有字段可选
///
/// 可空字段传 `null` 时清空，缺省时保持原值
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(range(min = 0))]
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock: Option<Option<i32>>,

    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,

    #[serde(
        rename = "categoryId",
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<i32>>,

    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_item: Option<Option<String>>,
}

/// 批量删除商品请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct DeleteManyDto {
    #[validate(
        length(min = 1, message = "ids cannot be empty"),
        custom(function = "validate_positive_ids")
    )]
    pub ids: Vec<i32>,
}

#[allow(clippy::ptr_arg)]
fn validate_positive_ids(ids: &Vec<i32>) -> Result<(), ValidationError> {
    if ids.iter().all(|id| *id >= 1) {
        Ok(())
    } else {
        Err(ValidationError::new("positive_ids"))
    }
}

impl From<CreateProductDto> for NewProduct {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            image_url: dto.image_url,
            group_item: dto.group_item,
            category_id: dto.category_id,
        }
    }
}

impl From<UpdateProductDto> for ProductChanges {
    fn from(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            image_url: dto.image_url,
            group_item: dto.group_item,
            category_id: dto.category_id,
        }
    }
}
