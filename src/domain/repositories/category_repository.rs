// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::category::{Category, CategoryChanges, NewCategory};
use crate::domain::models::pagination::{PageRequest, Paginated};
use crate::domain::models::product::ProductWithCategory;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 分类仓库特质
///
/// 写操作走写连接，查询走读连接
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 创建新分类
    async fn create(&self, category: NewCategory) -> Result<Category, RepositoryError>;
    /// 分页列出分类，按ID倒序
    async fn find_all(&self, page: PageRequest) -> Result<Paginated<Category>, RepositoryError>;
    /// 根据ID查找分类，不存在时返回 `None`
    async fn find_one(&self, id: i32) -> Result<Option<Category>, RepositoryError>;
    /// 部分更新分类，目标不存在时返回 `NotFound`
    async fn update(&self, id: i32, changes: CategoryChanges)
        -> Result<Category, RepositoryError>;
    /// 删除分类，目标不存在时返回 `NotFound`
    async fn remove(&self, id: i32) -> Result<(), RepositoryError>;
    /// 分页列出某分类下的商品（附带分类），不校验分类是否存在
    async fn find_products_by_category(
        &self,
        category_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<ProductWithCategory>, RepositoryError>;
}
