// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::product::NewProduct;
use crate::domain::repositories::product_repository::ProductRepository;
use crate::infrastructure::database::connection::DataStore;
use crate::infrastructure::database::entities::product as product_entity;
use crate::infrastructure::repositories::product_repo_impl::ProductRepositoryImpl;
use crate::utils::errors::RepositoryError;
use sea_orm::EntityTrait;
use std::sync::Arc;
use tracing::info;

/// 示例商品：名称、描述、价格、库存
const SAMPLE_PRODUCTS: &[(&str, &str, f64, i32)] = &[
    ("Laptop Asus ROG", "Laptop gaming dengan performa tinggi", 15_000_000.0, 10),
    ("Smartphone Samsung Galaxy S21", "Smartphone flagship dengan kamera terbaik", 12_000_000.0, 15),
    ("Monitor LG 27 inch", "Monitor dengan resolusi 4K dan refresh rate 144Hz", 3_500_000.0, 8),
    ("Keyboard Mechanical Logitech", "Keyboard gaming dengan switch blue", 1_200_000.0, 20),
    ("Mouse Gaming Razer", "Mouse gaming dengan DPI tinggi", 800_000.0, 25),
    ("Headset SteelSeries", "Headset gaming dengan noise cancellation", 1_500_000.0, 12),
    ("Webcam Logitech C920", "Webcam HD untuk streaming dan meeting", 950_000.0, 7),
    ("SSD Samsung 1TB", "SSD dengan kecepatan baca/tulis tinggi", 1_800_000.0, 30),
    ("RAM Corsair 16GB", "RAM DDR4 dengan frekuensi 3200MHz", 1_200_000.0, 18),
    ("Power Supply Corsair 750W", "Power supply modular dengan sertifikasi Gold", 1_500_000.0, 5),
];

/// 写入示例商品
///
/// 先清空商品表，再逐条插入示例数据；分类表保持不变。
///
/// # 返回值
///
/// 返回写入的商品数量
pub async fn seed_catalog(store: Arc<DataStore>) -> Result<usize, RepositoryError> {
    let cleared = product_entity::Entity::delete_many()
        .exec(store.writer())
        .await?;
    info!(removed = cleared.rows_affected, "Seeding database...");

    let products = ProductRepositoryImpl::new(store);
    for (name, description, price, stock) in SAMPLE_PRODUCTS {
        products
            .create(NewProduct {
                name: name.to_string(),
                description: Some(description.to_string()),
                price: *price,
                stock: Some(*stock),
                image_url: None,
                group_item: None,
                category_id: None,
            })
            .await?;
    }

    info!(inserted = SAMPLE_PRODUCTS.len(), "Seeding completed");
    Ok(SAMPLE_PRODUCTS.len())
}
