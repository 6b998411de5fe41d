// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供读写分离的数据存储、实体定义与示例数据写入
pub mod connection;
pub mod entities;
pub mod seed;
