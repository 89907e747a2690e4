//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::error::ErrorCode;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active menu items, ordered by code
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_active = true ORDER BY code")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find by code (`SP000018`) or full id (`menu_item:SP000018`)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let thing = parse_record_id(TABLE, id)?;
        let item: Option<MenuItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Number of stored items, active or not
    pub async fn count(&self) -> RepoResult<i64> {
        self.base
            .count("SELECT count() AS total FROM menu_item GROUP ALL", Vec::new())
            .await
    }

    /// Create a menu item keyed by its code
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let thing = parse_record_id(TABLE, &data.code)?;
        let existing: Option<MenuItem> = self.base.db().select(thing.clone()).await?;
        if existing.is_some() {
            return Err(RepoError::duplicate(
                ErrorCode::MenuItemCodeExists,
                format!("Menu item '{}' already exists", data.code),
            ));
        }

        let item = data.into_item();
        let created: Vec<MenuItem> = self
            .base
            .db()
            .query("CREATE $thing CONTENT $data")
            .bind(("thing", thing))
            .bind(("data", item))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Partial update; absent fields keep their value
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let thing = self.existing(id).await?;

        let updated: Vec<MenuItem> = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?
            .take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| not_found(id))
    }

    /// Hard delete a menu item
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.existing(id).await?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }

    async fn existing(&self, id: &str) -> RepoResult<RecordId> {
        let thing = parse_record_id(TABLE, id)?;
        let existing: Option<MenuItem> = self.base.db().select(thing.clone()).await?;
        match existing {
            Some(_) => Ok(thing),
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: &str) -> RepoError {
    RepoError::not_found(ErrorCode::MenuItemNotFound, format!("Menu item {} not found", id))
}
