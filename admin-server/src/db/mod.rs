//! 数据库层
//!
//! 嵌入式 SurrealDB (RocksDB 存储)。
//!
//! - [`models`] - 表结构与 API payload
//! - [`repository`] - 各表 CRUD
//! - [`seed`] - 演示菜单

pub mod models;
pub mod repository;
pub mod seed;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use repository::{MenuItemRepository, RepoResult};

pub const NAMESPACE: &str = "pos";
pub const DATABASE: &str = "admin";

/// 唯一索引，作为仓储层重复检查之外的兜底
const SCHEMA: &str = r#"
DEFINE INDEX IF NOT EXISTS employee_username ON TABLE employee FIELDS username UNIQUE;
DEFINE INDEX IF NOT EXISTS branch_name ON TABLE branch FIELDS name UNIQUE;
DEFINE INDEX IF NOT EXISTS dining_table_branch_name ON TABLE dining_table FIELDS branch, name UNIQUE;
"#;

#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the datastore at `path`
    pub async fn open(path: &Path) -> RepoResult<Self> {
        let db = Surreal::new::<RocksDb>(path).await?;
        Self::from_db(db).await
    }

    /// Select namespace/database and apply the schema on an existing handle
    pub async fn from_db(db: Surreal<Db>) -> RepoResult<Self> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        db.query(SCHEMA).await?.check()?;
        Ok(Self { db })
    }

    /// Insert the demo menu when the menu table is empty
    ///
    /// Returns the number of inserted items.
    pub async fn seed_demo_catalog(&self) -> RepoResult<usize> {
        let repo = MenuItemRepository::new(self.db.clone());
        if repo.count().await? > 0 {
            return Ok(0);
        }

        let items = seed::demo_menu();
        let count = items.len();
        for item in items {
            repo.create(item).await?;
        }
        Ok(count)
    }
}
