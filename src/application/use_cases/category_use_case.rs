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
            category_request::{CreateCategoryDto, UpdateCategoryDto},
            pagination_request::PaginationRequestDto,
        },
        response::ApiResponse,
    },
    domain::{
        models::{category::Category, pagination::Paginated, product::ProductWithCategory},
        repositories::category_repository::CategoryRepository,
    },
};
use std::sync::Arc;
use validator::Validate;

const CATEGORY: &str = "Category";

pub struct CategoryUseCase<CR> {
    category_repo: Arc<CR>,
}

impl<CR> CategoryUseCase<CR>
where
    CR: CategoryRepository + 'static,
{
    pub fn new(category_repo: Arc<CR>) -> Self {
        Self { category_repo }
    }

    pub async fn create(
        &self,
        dto: CreateCategoryDto,
    ) -> Result<ApiResponse<Category>, UseCaseError> {
        dto.validate()?;
        let category = self.category_repo.create(dto.into()).await?;
        Ok(ApiResponse::success_with(
            category,
            "Category created successfully",
            None,
        ))
    }

    pub async fn find_all(
        &self,
        pagination: PaginationRequestDto,
    ) -> Result<ApiResponse<Paginated<Category>>, UseCaseError> {
        pagination.validate()?;
        let categories = self.category_repo.find_all((&pagination).into()).await?;
        Ok(ApiResponse::success_with(
            categories,
            "Categories retrieved successfully",
            None,
        ))
    }

    pub async fn find_one(&self, id: i32) -> Result<ApiResponse<Category>, UseCaseError> {
        let category = self
            .category_repo
            .find_one(id)
            .await?
            .ok_or(UseCaseError::NotFound(CATEGORY))?;
        Ok(ApiResponse::success_with(
            category,
            "Category retrieved successfully",
            None,
        ))
    }

    /// 查询分类下的商品
    ///
    /// 先确认分类存在，不存在时返回未找到，而不是空列表
    pub async fn find_products_by_category(
        &self,
        id: i32,
        pagination: PaginationRequestDto,
    ) -> Result<ApiResponse<Paginated<ProductWithCategory>>, UseCaseError> {
        pagination.validate()?;
        let category = self
            .category_repo
            .find_one(id)
            .await?
            .ok_or(UseCaseError::NotFound(CATEGORY))?;

        let products = self
            .category_repo
            .find_products_by_category(id, (&pagination).into())
            .await?;
        Ok(ApiResponse::success_with(
            products,
            format!(
                "Products in category '{}' retrieved successfully",
                category.name
            ),
            None,
        ))
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateCategoryDto,
    ) -> Result<ApiResponse<Category>, UseCaseError> {
        dto.validate()?;
        let category = self
            .category_repo
            .update(id, dto.into())
            .await
            .map_err(UseCaseError::not_found_as(CATEGORY))?;
        Ok(ApiResponse::success_with(
            category,
            "Category updated successfully",
            None,
        ))
    }

    pub async fn remove(&self, id: i32) -> Result<ApiResponse<()>, UseCaseError> {
        self.category_repo
            .remove(id)
            .await
            .map_err(UseCaseError::not_found_as(CATEGORY))?;
        Ok(ApiResponse::success_with((), "Category deleted successfully", None))
    }
}
