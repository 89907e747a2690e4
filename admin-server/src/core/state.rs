use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
///
/// `Surreal<Db>` 内部共享连接，`clone()` 成本很低，每个 handler 都持有一份。
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录
    /// 2. 打开 `{work_dir}/database` 下的 RocksDB 并定义索引
    /// 3. 菜单为空且启用 `seed_demo_data` 时写入演示菜单
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir();
        let service = DbService::open(&db_path).await?;
        tracing::info!(path = %db_path.display(), "Database opened");

        if config.seed_demo_data {
            let seeded = service.seed_demo_catalog().await?;
            if seeded > 0 {
                tracing::info!(count = seeded, "Seeded demo menu");
            }
        }

        Ok(Self::new(config.clone(), service.db))
    }
}
