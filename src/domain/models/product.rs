// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::category::Category;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 商品实体
///
/// `stock` 缺省表示未设置库存，而不是库存为 0；
/// `group_item` 是独立于分类的自由分组标签。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub group_item: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<FixedOffset>,
}

/// 附带所属分类的商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    /// 所属分类，未设置 `categoryId` 时为空
    pub category: Option<Category>,
}

/// 新建商品所需字段
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub group_item: Option<String>,
    pub category_id: Option<i32>,
}

/// 商品的部分更新，`None` 表示保持原值
///
/// 可空字段使用 `Option<Option<T>>`：`Some(None)` 表示清空。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub stock: Option<Option<i32>>,
    pub image_url: Option<Option<String>>,
    pub group_item: Option<Option<String>>,
    pub category_id: Option<Option<i32>>,
}
