// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, insert_category, insert_product};
use catalogrs::domain::models::category::{CategoryChanges, NewCategory};
use catalogrs::domain::models::pagination::PageRequest;
use catalogrs::domain::repositories::category_repository::CategoryRepository;
use catalogrs::domain::repositories::product_repository::ProductRepository;
use catalogrs::utils::errors::RepositoryError;

/// 测试创建后按ID查找，字段与输入一致
#[tokio::test]
async fn test_create_then_find_one_round_trip() {
    let app = create_test_app().await;

    let created = app
        .categories
        .create(NewCategory {
            name: "Laptop".to_string(),
            description: Some("Kategori untuk produk laptop".to_string()),
        })
        .await
        .unwrap();

    let found = app.categories.find_one(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Laptop");
    assert_eq!(
        found.description.as_deref(),
        Some("Kategori untuk produk laptop")
    );
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_one_missing_returns_none() {
    let app = create_test_app().await;
    assert!(app.categories.find_one(9999).await.unwrap().is_none());
}

/// 测试分页列表默认值与倒序
#[tokio::test]
async fn test_find_all_defaults_and_orders_newest_first() {
    let app = create_test_app().await;
    for i in 0..12 {
        insert_category(&app, &format!("category-{}", i)).await;
    }

    let first = app.categories.find_all(PageRequest::default()).await.unwrap();
    assert_eq!(first.meta.total, 12);
    assert_eq!(first.meta.page, 1);
    assert_eq!(first.meta.limit, 10);
    assert_eq!(first.meta.total_pages, 2);
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.data[0].name, "category-11");

    let ids: Vec<i32> = first.data.iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);

    let second = app
        .categories
        .find_all(PageRequest::new(Some(2), None))
        .await
        .unwrap();
    assert_eq!(second.data.len(), 2);
    assert_eq!(second.data[1].name, "category-0");
}

#[tokio::test]
async fn test_find_all_on_empty_table() {
    let app = create_test_app().await;
    let page = app.categories.find_all(PageRequest::default()).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.total_pages, 0);
}

/// 测试部分更新只替换提供的字段
#[tokio::test]
async fn test_update_replaces_only_supplied_fields() {
    let app = create_test_app().await;
    let created = app
        .categories
        .create(NewCategory {
            name: "Audio".to_string(),
            description: Some("Headsets".to_string()),
        })
        .await
        .unwrap();

    let updated = app
        .categories
        .update(
            created.id,
            CategoryChanges {
                name: Some("Audio & Video".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Audio & Video");
    assert_eq!(updated.description.as_deref(), Some("Headsets"));
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let app = create_test_app().await;
    let result = app
        .categories
        .update(
            404,
            CategoryChanges {
                name: Some("Ghost".to_string()),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_remove_and_remove_missing() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Temporary").await;

    app.categories.remove(category.id).await.unwrap();
    assert!(app.categories.find_one(category.id).await.unwrap().is_none());

    let again = app.categories.remove(category.id).await;
    assert!(matches!(again, Err(RepositoryError::NotFound)));
}

/// 删除分类不会级联删除商品，商品的分类被置空
#[tokio::test]
async fn test_remove_category_keeps_products() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Peripherals").await;
    let product = insert_product(&app, "Mouse Gaming Razer", Some(category.id)).await;

    app.categories.remove(category.id).await.unwrap();

    let found = app.products.find_one(product.id).await.unwrap().unwrap();
    assert_eq!(found.product.category_id, None);
    assert!(found.category.is_none());
}

/// 测试分类下商品查询只返回该分类的商品，且附带分类信息
#[tokio::test]
async fn test_find_products_by_category_filters_and_joins() {
    let app = create_test_app().await;
    let laptops = insert_category(&app, "Laptop").await;
    let monitors = insert_category(&app, "Monitor").await;

    let first = insert_product(&app, "Laptop Asus ROG", Some(laptops.id)).await;
    insert_product(&app, "Monitor LG 27 inch", Some(monitors.id)).await;
    let second = insert_product(&app, "Laptop Lenovo Legion", Some(laptops.id)).await;
    insert_product(&app, "Uncategorized cable", None).await;

    let page = app
        .categories
        .find_products_by_category(laptops.id, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.meta.total, 2);
    assert_eq!(page.meta.total_pages, 1);
    let ids: Vec<i32> = page.data.iter().map(|p| p.product.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    for item in &page.data {
        assert_eq!(item.product.category_id, Some(laptops.id));
        assert_eq!(item.category.as_ref().map(|c| c.name.as_str()), Some("Laptop"));
    }
}

#[tokio::test]
async fn test_find_products_by_unknown_category_is_empty() {
    let app = create_test_app().await;
    let page = app
        .categories
        .find_products_by_category(77, PageRequest::new(Some(3), Some(5)))
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.page, 3);
    assert_eq!(page.meta.limit, 5);
}

#[tokio::test]
async fn test_update_with_explicit_null_clears_description() {
    let app = create_test_app().await;
    let created = app
        .categories
        .create(NewCategory {
            name: "Printer".to_string(),
            description: Some("Inkjet".to_string()),
        })
        .await
        .unwrap();

    let updated = app
        .categories
        .update(
            created.id,
            CategoryChanges {
                description: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Printer");
    assert!(updated.description.is_none());
}

/// 超出末页或极大的分页参数返回空页，元数据照常计算
#[tokio::test]
async fn test_pages_past_the_end_are_empty() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Networking").await;
    for i in 0..3 {
        insert_product(&app, &format!("router-{}", i), Some(category.id)).await;
    }

    let page = app
        .categories
        .find_all(PageRequest::new(Some(1_000_000), Some(10)))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.meta.page, 1_000_000);
    assert_eq!(page.meta.total_pages, 1);

    let page = app
        .categories
        .find_products_by_category(category.id, PageRequest::new(Some(u64::MAX), Some(10)))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.total_pages, 1);
}
