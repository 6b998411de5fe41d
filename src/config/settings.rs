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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 日志配置
    pub logging: LoggingSettings,
    /// 种子数据配置
    pub seed: SeedSettings,
}

/// 数据库配置设置
///
/// 写连接始终使用 `url`；读连接使用 `read_url`，未配置时回退到 `url`。
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 写库连接URL
    pub url: String,
    /// 读库连接URL（例如只读副本）
    pub read_url: Option<String>,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

impl DatabaseSettings {
    /// 仅使用单个URL构造配置，其余选项保持默认
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            read_url: None,
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
        }
    }

    /// 读连接的目标地址
    pub fn read_endpoint(&self) -> &str {
        self.read_url.as_deref().unwrap_or(&self.url)
    }
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 默认过滤规则，`RUST_LOG` 存在时以环境变量为准
    pub filter: String,
    /// 是否输出JSON格式日志
    pub json: bool,
}

/// 种子数据配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    /// 启动时是否写入示例商品
    pub on_startup: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件与环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CATALOGRS").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Default DB settings
            .set_default("database.url", "sqlite://catalog.db?mode=rwc")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default logging settings
            .set_default("logging.filter", "info,catalogrs=debug")?
            .set_default("logging.json", false)?
            .set_default("seed.on_startup", false)
    }
}
