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

use catalogrs::config::settings::Settings;
use catalogrs::infrastructure::database::connection::DataStore;
use catalogrs::infrastructure::database::seed;
use catalogrs::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责建立读写连接、执行迁移，并在收到退出信号后关闭连接
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging)?;
    info!("Starting catalogrs...");

    // 3. Connect both storage handles; failure here is fatal
    let store = Arc::new(DataStore::connect(&settings.database).await?);
    info!("Data store connected");

    // 4. Run database migrations on the write handle
    info!("Running database migrations...");
    Migrator::up(store.writer(), None).await?;
    info!("Database migrations applied");

    if settings.seed.on_startup {
        seed::seed_catalog(store.clone()).await?;
    }

    // 5. Wait for shutdown signal
    info!("Catalog data layer ready, press Ctrl+C to stop");
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }

    info!("Shutting down...");
    store.shutdown().await?;

    Ok(())
}
