// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::UseCaseError;
use crate::{
    application::{
        dto::{
            pagination_request::PaginationRequestDto,
            product_request::{CreateProductDto, DeleteManyDto, UpdateProductDto},
        },
        response::ApiResponse,
    },
    domain::{
        models::{
            pagination::Paginated,
            product::{Product, ProductWithCategory},
        },
        repositories::product_repository::ProductRepository,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

const PRODUCT: &str = "Product";

/// 批量删除结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteResult {
    /// 请求删除的ID数量
    pub requested: usize,
    /// 实际删除的行数
    pub deleted: u64,
}

pub struct ProductUseCase<PR> {
    product_repo: Arc<PR>,
}

impl<PR> ProductUseCase<PR>
where
    PR: ProductRepository + 'static,
{
    pub fn new(product_repo: Arc<PR>) -> Self {
        Self { product_repo }
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ApiResponse<Product>, UseCaseError> {
        dto.validate()?;
        let product = self.product_repo.create(dto.into()).await?;
        Ok(ApiResponse::success_with(
            product,
            "Product created successfully",
            None,
        ))
    }

    pub async fn find_all(
        &self,
        pagination: PaginationRequestDto,
    ) -> Result<ApiResponse<Paginated<ProductWithCategory>>, UseCaseError> {
        pagination.validate()?;
        let products = self.product_repo.find_all((&pagination).into()).await?;
        Ok(ApiResponse::success_with(
            products,
            "Products retrieved successfully",
            None,
        ))
    }

    pub async fn find_one(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ProductWithCategory>, UseCaseError> {
        let product = self
            .product_repo
            .find_one(id)
            .await?
            .ok_or(UseCaseError::NotFound(PRODUCT))?;
        Ok(ApiResponse::success_with(
            product,
            "Product retrieved successfully",
            None,
        ))
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateProductDto,
    ) -> Result<ApiResponse<Product>, UseCaseError> {
        dto.validate()?;
        let product = self
            .product_repo
            .update(id, dto.into())
            .await
            .map_err(UseCaseError::not_found_as(PRODUCT))?;
        Ok(ApiResponse::success_with(
            product,
            "Product updated successfully",
            None,
        ))
    }

    pub async fn remove(&self, id: i32) -> Result<ApiResponse<()>, UseCaseError> {
        self.product_repo
            .remove(id)
            .await
            .map_err(UseCaseError::not_found_as(PRODUCT))?;
        Ok(ApiResponse::success_with((), "Product deleted successfully", None))
    }

    /// 批量删除商品，不存在的ID被忽略，整体仍视为成功
    pub async fn remove_many(
        &self,
        dto: DeleteManyDto,
    ) -> Result<ApiResponse<BulkDeleteResult>, UseCaseError> {
        dto.validate()?;
        let deleted = self.product_repo.remove_many(&dto.ids).await?;
        Ok(ApiResponse::success_with(
            BulkDeleteResult {
                requested: dto.ids.len(),
                deleted,
            },
            "Products deleted successfully",
            None,
        ))
    }
}
