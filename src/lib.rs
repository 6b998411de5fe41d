// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求校验、响应信封与用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体与仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供读写分离的数据存储与仓库实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;
