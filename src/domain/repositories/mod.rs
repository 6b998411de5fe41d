// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层基于读写分离的数据存储提供。
///
/// 包含的仓库接口：
/// - 分类仓库（category_repository）：分类的增删改查及分类下商品查询
/// - 商品仓库（product_repository）：商品的增删改查及批量删除
pub mod category_repository;
pub mod product_repository;
