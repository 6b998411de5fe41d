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

use crate::domain::models::category::{Category, CategoryChanges, NewCategory};
use crate::domain::models::pagination::{PageRequest, Paginated};
use crate::domain::models::product::ProductWithCategory;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::infrastructure::database::connection::DataStore;
use crate::infrastructure::database::entities::{category as category_entity, product as product_entity};
use crate::infrastructure::repositories::product_repo_impl::with_category;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// 分类仓库实现
///
/// 基于SeaORM实现的分类数据访问层，写操作使用写句柄，查询使用读句柄
#[derive(Clone)]
pub struct CategoryRepositoryImpl {
    /// 读写分离的数据存储
    store: Arc<DataStore>,
}

impl CategoryRepositoryImpl {
    /// 创建新的分类仓库实例
    ///
    /// # 参数
    ///
    /// * `store` - 数据存储
    ///
    /// # 返回值
    ///
    /// 返回新的分类仓库实例
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl From<category_entity::Model> for Category {
    fn from(model: category_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create(&self, category: NewCategory) -> Result<Category, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let model = category_entity::ActiveModel {
            name: Set(category.name),
            description: Set(category.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = model.insert(self.store.writer()).await?;
        info!(category_id = created.id, "Category created");
        Ok(created.into())
    }

    #[instrument(skip(self, page), fields(page_no = page.page(), limit = page.limit()))]
    async fn find_all(&self, page: PageRequest) -> Result<Paginated<Category>, RepositoryError> {
        let db = self.store.reader();

        let count = category_entity::Entity::find().count(db);
        let rows = category_entity::Entity::find()
            .order_by_desc(category_entity::Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(db);
        let (total, models) = tokio::try_join!(count, rows)?;

        debug!(total, returned = models.len(), "Listed categories");
        Ok(Paginated {
            data: models.into_iter().map(Category::from).collect(),
            meta: page.meta(total),
        })
    }

    async fn find_one(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        let model = category_entity::Entity::find_by_id(id)
            .one(self.store.reader())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(
        &self,
        id: i32,
        changes: CategoryChanges,
    ) -> Result<Category, RepositoryError> {
        let mut model = category_entity::ActiveModel {
            id: Unchanged(id),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }

        // 目标不存在时存储层返回 RecordNotUpdated，转换为 NotFound
        let updated = model.update(self.store.writer()).await?;
        info!(category_id = id, "Category updated");
        Ok(updated.into())
    }

    async fn remove(&self, id: i32) -> Result<(), RepositoryError> {
        let result = category_entity::Entity::delete_by_id(id)
            .exec(self.store.writer())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!(category_id = id, "Category removed");
        Ok(())
    }

    #[instrument(skip(self, page), fields(page_no = page.page(), limit = page.limit()))]
    async fn find_products_by_category(
        &self,
        category_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<ProductWithCategory>, RepositoryError> {
        let db = self.store.reader();
        let query = product_entity::Entity::find()
            .filter(product_entity::Column::CategoryId.eq(category_id));

        let count = query.clone().count(db);
        let rows = query
            .find_also_related(category_entity::Entity)
            .order_by_desc(product_entity::Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(db);
        let (total, models) = tokio::try_join!(count, rows)?;

        debug!(total, returned = models.len(), "Listed products in category");
        Ok(Paginated {
            data: models.into_iter().map(with_category).collect(),
            meta: page.meta(total),
        })
    }
}
