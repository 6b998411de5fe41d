// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义调用方传入的请求对象及其校验规则
/// 用于在外部输入和领域模型之间转换数据
pub mod category_request;
pub mod pagination_request;
pub mod product_request;

use serde::{Deserialize, Deserializer};

/// 区分字段缺省与显式 `null`
///
/// 配合 `#[serde(default)]` 使用：缺省得到 `None`，`null` 得到 `Some(None)`。
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
