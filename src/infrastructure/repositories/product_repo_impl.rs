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

use crate::domain::models::category::Category;
use crate::domain::models::pagination::{PageRequest, Paginated};
use crate::domain::models::product::{NewProduct, Product, ProductChanges, ProductWithCategory};
use crate::domain::repositories::product_repository::ProductRepository;
use crate::infrastructure::database::connection::DataStore;
use crate::infrastructure::database::entities::{category as category_entity, product as product_entity};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// 商品仓库实现
///
/// 基于SeaORM实现的商品数据访问层
#[derive(Clone)]
pub struct ProductRepositoryImpl {
    /// 读写分离的数据存储
    store: Arc<DataStore>,
}

impl ProductRepositoryImpl {
    /// 创建新的商品仓库实例
    ///
    /// # 参数
    ///
    /// * `store` - 数据存储
    ///
    /// # 返回值
    ///
    /// 返回新的商品仓库实例
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl From<product_entity::Model> for Product {
    fn from(model: product_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock: model.stock,
            image_url: model.image_url,
            group_item: model.group_item,
            category_id: model.category_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// 将联表查询结果组装为附带分类的商品
pub(crate) fn with_category(
    (product, category): (product_entity::Model, Option<category_entity::Model>),
) -> ProductWithCategory {
    ProductWithCategory {
        product: product.into(),
        category: category.map(Category::from),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let model = product_entity::ActiveModel {
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            stock: Set(product.stock),
            image_url: Set(product.image_url),
            group_item: Set(product.group_item),
            category_id: Set(product.category_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // 外键有效性由存储层校验，失败时归类为 ConstraintViolation
        let created = model.insert(self.store.writer()).await?;
        info!(product_id = created.id, category_id = ?created.category_id, "Product created");
        Ok(created.into())
    }

    #[instrument(skip(self, page), fields(page_no = page.page(), limit = page.limit()))]
    async fn find_all(
        &self,
        page: PageRequest,
    ) -> Result<Paginated<ProductWithCategory>, RepositoryError> {
        let db = self.store.reader();

        let count = product_entity::Entity::find().count(db);
        let rows = product_entity::Entity::find()
            .find_also_related(category_entity::Entity)
            .order_by_desc(product_entity::Column::Id)
            .offset(page.skip())
            .limit(page.limit())
            .all(db);
        let (total, models) = tokio::try_join!(count, rows)?;

        debug!(total, returned = models.len(), "Listed products");
        Ok(Paginated {
            data: models.into_iter().map(with_category).collect(),
            meta: page.meta(total),
        })
    }

    async fn find_one(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError> {
        let model = product_entity::Entity::find_by_id(id)
            .find_also_related(category_entity::Entity)
            .one(self.store.reader())
            .await?;

        Ok(model.map(with_category))
    }

    async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, RepositoryError> {
        let mut model = product_entity::ActiveModel {
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
        if let Some(price) = changes.price {
            model.price = Set(price);
        }
        if let Some(stock) = changes.stock {
            model.stock = Set(stock);
        }
        if let Some(image_url) = changes.image_url {
            model.image_url = Set(image_url);
        }
        if let Some(group_item) = changes.group_item {
            model.group_item = Set(group_item);
        }
        if let Some(category_id) = changes.category_id {
            model.category_id = Set(category_id);
        }

        let updated = model.update(self.store.writer()).await?;
        info!(product_id = id, "Product updated");
        Ok(updated.into())
    }

    async fn remove(&self, id: i32) -> Result<(), RepositoryError> {
        let result = product_entity::Entity::delete_by_id(id)
            .exec(self.store.writer())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!(product_id = id, "Product removed");
        Ok(())
    }

    async fn remove_many(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Single statement; unknown ids simply match nothing
        let result = product_entity::Entity::delete_many()
            .filter(product_entity::Column::Id.is_in(ids.iter().copied()))
            .exec(self.store.writer())
            .await?;

        info!(
            requested = ids.len(),
            removed = result.rows_affected,
            "Products removed in bulk"
        );
        Ok(result.rows_affected)
    }
}
