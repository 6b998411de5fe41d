// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了商品目录的核心实体：
/// - 分类（category）：商品的归类
/// - 商品（product）：可选地归属于某个分类
/// - 分页（pagination）：分页请求解析与元数据计算
pub mod category;
pub mod pagination;
pub mod product;
