// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求对象、统一响应信封以及调用仓库的用例实现
/// 该模块遵循领域驱动设计（DDD）原则，将业务流程与基础设施分离
pub mod dto;
pub mod response;
pub mod use_cases;
