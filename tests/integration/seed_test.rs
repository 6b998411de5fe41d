// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, insert_category, insert_product};
use catalogrs::domain::models::pagination::PageRequest;
use catalogrs::domain::repositories::category_repository::CategoryRepository;
use catalogrs::domain::repositories::product_repository::ProductRepository;
use catalogrs::infrastructure::database::seed::seed_catalog;

/// 种子数据会清空已有商品，但保留分类
#[tokio::test]
async fn test_seed_replaces_products_and_keeps_categories() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Existing").await;
    insert_product(&app, "Stale product", Some(category.id)).await;

    let inserted = seed_catalog(app.store.clone()).await.unwrap();
    assert_eq!(inserted, 10);

    let page = app.products.find_all(PageRequest::default()).await.unwrap();
    assert_eq!(page.meta.total, 10);
    assert_eq!(page.data[0].product.name, "Power Supply Corsair 750W");
    assert!(page.data.iter().all(|p| p.product.name != "Stale product"));

    // Running again is repeatable
    assert_eq!(seed_catalog(app.store.clone()).await.unwrap(), 10);
    let page = app.products.find_all(PageRequest::default()).await.unwrap();
    assert_eq!(page.meta.total, 10);

    assert!(app.categories.find_one(category.id).await.unwrap().is_some());
}
