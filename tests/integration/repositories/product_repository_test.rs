// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, insert_category, insert_product, new_product};
use catalogrs::domain::models::pagination::PageRequest;
use catalogrs::domain::models::product::{NewProduct, ProductChanges};
use catalogrs::domain::repositories::product_repository::ProductRepository;
use catalogrs::utils::errors::RepositoryError;

/// 测试创建后查找，所有字段与输入一致并附带分类
#[tokio::test]
async fn test_create_then_find_one_round_trip() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Laptop").await;

    let input = NewProduct {
        name: "Laptop Asus ROG".to_string(),
        description: Some("Laptop gaming dengan spesifikasi tinggi".to_string()),
        price: 15_000_000.0,
        stock: Some(10),
        image_url: Some("https://example.com/laptop.jpg".to_string()),
        group_item: Some("Elektronik".to_string()),
        category_id: Some(category.id),
    };
    let created = app.products.create(input.clone()).await.unwrap();

    let found = app.products.find_one(created.id).await.unwrap().unwrap();
    let product = &found.product;
    assert_eq!(product.id, created.id);
    assert_eq!(product.name, input.name);
    assert_eq!(product.description, input.description);
    assert_eq!(product.price, input.price);
    assert_eq!(product.stock, input.stock);
    assert_eq!(product.image_url, input.image_url);
    assert_eq!(product.group_item, input.group_item);
    assert_eq!(product.category_id, Some(category.id));
    assert_eq!(found.category.as_ref().map(|c| c.id), Some(category.id));
}

#[tokio::test]
async fn test_unset_stock_stays_unset() {
    let app = create_test_app().await;
    let created = app
        .products
        .create(new_product("Webcam Logitech C920", 950_000.0, None))
        .await
        .unwrap();

    let found = app.products.find_one(created.id).await.unwrap().unwrap();
    assert_eq!(found.product.stock, None);
    assert!(found.category.is_none());
}

#[tokio::test]
async fn test_find_one_missing_returns_none() {
    let app = create_test_app().await;
    assert!(app.products.find_one(12345).await.unwrap().is_none());
}

/// 外键指向不存在的分类时由存储层拒绝
#[tokio::test]
async fn test_create_with_unknown_category_is_constraint_violation() {
    let app = create_test_app().await;
    let result = app
        .products
        .create(new_product("Orphan", 1.0, Some(999)))
        .await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

/// 测试分页列表：倒序、附带分类、元数据正确
#[tokio::test]
async fn test_find_all_paginates_with_category() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Storage").await;
    for i in 0..7 {
        let category_id = if i % 2 == 0 { Some(category.id) } else { None };
        insert_product(&app, &format!("product-{}", i), category_id).await;
    }

    let page = app
        .products
        .find_all(PageRequest::new(Some(2), Some(3)))
        .await
        .unwrap();

    assert_eq!(page.meta.total, 7);
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.limit, 3);
    assert_eq!(page.meta.total_pages, 3);

    let names: Vec<&str> = page.data.iter().map(|p| p.product.name.as_str()).collect();
    assert_eq!(names, vec!["product-3", "product-2", "product-1"]);
    assert!(page.data[0].category.is_none());
    assert_eq!(
        page.data[1].category.as_ref().map(|c| c.name.as_str()),
        Some("Storage")
    );
}

#[tokio::test]
async fn test_update_partial_fields() {
    let app = create_test_app().await;
    let created = app
        .products
        .create(NewProduct {
            stock: Some(25),
            ..new_product("Mouse Gaming Razer", 800_000.0, None)
        })
        .await
        .unwrap();

    let updated = app
        .products
        .update(
            created.id,
            ProductChanges {
                price: Some(750_000.0),
                group_item: Some(Some("Aksesoris".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Mouse Gaming Razer");
    assert_eq!(updated.price, 750_000.0);
    assert_eq!(updated.stock, Some(25));
    assert_eq!(updated.group_item.as_deref(), Some("Aksesoris"));
}

#[tokio::test]
async fn test_update_and_remove_missing_are_not_found() {
    let app = create_test_app().await;

    let update = app
        .products
        .update(
            31337,
            ProductChanges {
                name: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(update, Err(RepositoryError::NotFound)));

    let remove = app.products.remove(31337).await;
    assert!(matches!(remove, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_remove_deletes_product() {
    let app = create_test_app().await;
    let product = insert_product(&app, "Headset SteelSeries", None).await;

    app.products.remove(product.id).await.unwrap();
    assert!(app.products.find_one(product.id).await.unwrap().is_none());
}

/// 批量删除忽略不存在的ID，其余照常删除
#[tokio::test]
async fn test_remove_many_ignores_unknown_ids() {
    let app = create_test_app().await;
    let keep = insert_product(&app, "RAM Corsair 16GB", None).await;
    let first = insert_product(&app, "SSD Samsung 1TB", None).await;
    let second = insert_product(&app, "Power Supply Corsair 750W", None).await;

    let removed = app
        .products
        .remove_many(&[first.id, second.id, 9_999])
        .await
        .unwrap();
    assert_eq!(removed, 2);

    assert!(app.products.find_one(first.id).await.unwrap().is_none());
    assert!(app.products.find_one(second.id).await.unwrap().is_none());
    assert!(app.products.find_one(keep.id).await.unwrap().is_some());

    let none = app.products.remove_many(&[9_999]).await.unwrap();
    assert_eq!(none, 0);
    assert_eq!(app.products.remove_many(&[]).await.unwrap(), 0);
}

/// 显式清空可空字段，未提供的字段保持原值
#[tokio::test]
async fn test_update_clears_nullable_fields() {
    let app = create_test_app().await;
    let category = insert_category(&app, "Gaming").await;
    let created = app
        .products
        .create(NewProduct {
            description: Some("Mechanical".to_string()),
            stock: Some(12),
            image_url: Some("https://example.com/keyboard.jpg".to_string()),
            group_item: Some("Aksesoris".to_string()),
            ..new_product("Keyboard Mechanical", 1_200_000.0, Some(category.id))
        })
        .await
        .unwrap();

    let updated = app
        .products
        .update(
            created.id,
            ProductChanges {
                stock: Some(None),
                image_url: Some(None),
                category_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.stock, None);
    assert_eq!(updated.image_url, None);
    assert_eq!(updated.category_id, None);
    assert_eq!(updated.description.as_deref(), Some("Mechanical"));
    assert_eq!(updated.group_item.as_deref(), Some("Aksesoris"));

    let found = app.products.find_one(created.id).await.unwrap().unwrap();
    assert!(found.category.is_none());
}

#[tokio::test]
async fn test_find_all_with_huge_page_or_limit() {
    let app = create_test_app().await;
    for i in 0..4 {
        insert_product(&app, &format!("cable-{}", i), None).await;
    }

    let past_end = app
        .products
        .find_all(PageRequest::new(Some(u64::MAX), Some(10)))
        .await
        .unwrap();
    assert!(past_end.data.is_empty());
    assert_eq!(past_end.meta.total, 4);
    assert_eq!(past_end.meta.total_pages, 1);

    let everything = app
        .products
        .find_all(PageRequest::new(Some(1), Some(u64::MAX)))
        .await
        .unwrap();
    assert_eq!(everything.data.len(), 4);
    assert_eq!(everything.meta.total_pages, 1);
}
