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

use crate::config::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// 存储句柄的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    /// 仅用于创建、更新、删除
    Write,
    /// 仅用于计数、列表与查找
    Read,
}

impl fmt::Display for HandleRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HandleRole::Write => write!(f, "write"),
            HandleRole::Read => write!(f, "read"),
        }
    }
}

/// 绑定到某个角色的数据库连接
#[derive(Debug, Clone)]
pub struct StorageHandle {
    role: HandleRole,
    connection: DatabaseConnection,
}

impl StorageHandle {
    pub fn new(role: HandleRole, connection: DatabaseConnection) -> Self {
        Self { role, connection }
    }

    pub fn role(&self) -> HandleRole {
        self.role
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    async fn close(&self) -> Result<(), DbErr> {
        debug!(role = %self.role, "Closing storage handle");
        self.connection.clone().close().await
    }
}

/// 读写分离的数据存储
///
/// 进程启动时创建一次，通过 `Arc` 注入各仓库；关闭操作幂等。
/// 读句柄可以指向只读副本，仓库代码无需任何改动。
#[derive(Debug)]
pub struct DataStore {
    write: StorageHandle,
    read: StorageHandle,
    closed: AtomicBool,
}

impl DataStore {
    /// 按配置建立写连接与读连接
    ///
    /// 任一连接失败即返回错误，不做重试。
    ///
    /// # 参数
    ///
    /// * `settings` - 数据库配置
    ///
    /// # 返回值
    ///
    /// * `Ok(DataStore)` - 已连接的数据存储
    /// * `Err(DbErr)` - 连接过程中出现的错误
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbErr> {
        let write = create_pool(&settings.url, settings).await?;
        info!("Write storage handle connected");

        let read = create_pool(settings.read_endpoint(), settings).await?;
        info!(
            dedicated = settings.read_url.is_some(),
            "Read storage handle connected"
        );

        Ok(Self::from_connections(write, read))
    }

    /// 使用已建立的连接构造数据存储
    pub fn from_connections(write: DatabaseConnection, read: DatabaseConnection) -> Self {
        Self {
            write: StorageHandle::new(HandleRole::Write, write),
            read: StorageHandle::new(HandleRole::Read, read),
            closed: AtomicBool::new(false),
        }
    }

    /// 写句柄
    pub fn writer(&self) -> &DatabaseConnection {
        self.write.connection()
    }

    /// 读句柄
    pub fn reader(&self) -> &DatabaseConnection {
        self.read.connection()
    }

    pub fn handle(&self, role: HandleRole) -> &StorageHandle {
        match role {
            HandleRole::Write => &self.write,
            HandleRole::Read => &self.read,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// 关闭两个句柄，仅第一次调用生效
    pub async fn shutdown(&self) -> Result<(), DbErr> {
        if self.closed.swap(true, Ordering::AcqRel) {
            debug!("Data store already shut down");
            return Ok(());
        }

        let write_result = self.write.close().await;
        let read_result = self.read.close().await;
        info!("Data store shut down");

        write_result.and(read_result)
    }
}

/// 创建数据库连接池
async fn create_pool(url: &str, settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());

    if let Some(max) = settings.max_connections {
        opt.max_connections(max);
    }

    if let Some(min) = settings.min_connections {
        opt.min_connections(min);
    }

    if let Some(timeout) = settings.connect_timeout {
        opt.connect_timeout(Duration::from_secs(timeout));
        opt.acquire_timeout(Duration::from_secs(timeout));
    }

    if let Some(idle) = settings.idle_timeout {
        opt.idle_timeout(Duration::from_secs(idle));
    }

    opt.max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(false);

    Database::connect(opt).await
}
