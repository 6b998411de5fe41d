// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pagination::{PageRequest, Paginated};
use crate::domain::models::product::{NewProduct, Product, ProductChanges, ProductWithCategory};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 商品仓库特质
///
/// 定义商品数据访问接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 创建新商品
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    /// 分页列出商品（附带分类），按ID倒序
    async fn find_all(
        &self,
        page: PageRequest,
    ) -> Result<Paginated<ProductWithCategory>, RepositoryError>;
    /// 根据ID查找商品（附带分类）
    async fn find_one(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError>;
    /// 部分更新商品
    async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, RepositoryError>;
    /// 删除单个商品
    async fn remove(&self, id: i32) -> Result<(), RepositoryError>;
    /// 批量删除商品，忽略不存在的ID，返回实际删除的行数
    async fn remove_many(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
}
