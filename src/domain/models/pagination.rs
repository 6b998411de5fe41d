// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 默认页码
pub const DEFAULT_PAGE: u64 = 1;
/// 默认每页条数
pub const DEFAULT_LIMIT: u64 = 10;
/// 偏移量与每页条数的上限，存储驱动以 i64 绑定二者
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// 已解析的分页请求
///
/// 页码与每页条数缺省或为 0 时使用默认值，因此 `limit` 始终不小于 1；
/// `limit` 与 `skip` 不超过 [`MAX_BOUND`]，超出末页的请求得到空页。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            limit: limit
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_LIMIT)
                .min(MAX_BOUND),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// 偏移量：`(page - 1) * limit`
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_BOUND)
    }

    /// 根据总记录数生成分页元数据
    pub fn meta(&self, total: u64) -> PaginationMeta {
        PaginationMeta {
            total,
            page: self.page,
            limit: self.limit,
            total_pages: total.div_ceil(self.limit),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// 分页元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// 总记录数
    pub total: u64,
    /// 当前页码
    pub page: u64,
    /// 每页条数
    pub limit: u64,
    /// 总页数
    pub total_pages: u64,
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}
