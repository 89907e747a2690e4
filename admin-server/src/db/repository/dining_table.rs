//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult, branch, parse_record_id};
use crate::db::models::dining_table::DEFAULT_CAPACITY;
use crate::db::models::{Branch, DiningTable, DiningTableCreate, DiningTableUpdate};
use shared::error::ErrorCode;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active dining tables
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find all active tables of a branch
    pub async fn find_by_branch(&self, branch_id: &str) -> RepoResult<Vec<DiningTable>> {
        let branch = self.existing_branch(branch_id).await?;
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query(
                "SELECT * FROM dining_table WHERE branch = $branch AND is_active = true ORDER BY name",
            )
            .bind(("branch", branch))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Tables referencing `branch`, active or not
    pub async fn count_by_branch(&self, branch: &RecordId) -> RepoResult<i64> {
        self.base
            .count(
                "SELECT count() AS total FROM dining_table WHERE branch = $branch GROUP ALL",
                vec![("branch", branch.clone())],
            )
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing = parse_record_id(TABLE, id)?;
        let table: Option<DiningTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Find table by name in branch
    pub async fn find_by_name_in_branch(
        &self,
        branch: &RecordId,
        name: &str,
    ) -> RepoResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE branch = $branch AND name = $name")
            .bind(("branch", branch.clone()))
            .bind(("name", name.to_string()))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let branch = self.ensure_branch(data.branch).await?;

        if self
            .find_by_name_in_branch(&branch, &data.name)
            .await?
            .is_some()
        {
            return Err(duplicate(&data.name));
        }

        // SET instead of CONTENT: the branch link must stay a record, not a string
        let created: Vec<DiningTable> = self
            .base
            .db()
            .query(
                "CREATE dining_table SET name = $name, branch = $branch, capacity = $capacity, is_active = true",
            )
            .bind(("name", data.name))
            .bind(("branch", branch))
            .bind(("capacity", data.capacity.unwrap_or(DEFAULT_CAPACITY)))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    /// Update a dining table
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let branch = match data.branch {
            Some(branch) => self.ensure_branch(branch).await?,
            None => existing.branch.clone(),
        };
        let name = data.name.unwrap_or_else(|| existing.name.clone());

        if let Some(found) = self.find_by_name_in_branch(&branch, &name).await?
            && found.id != existing.id
        {
            return Err(duplicate(&name));
        }

        let capacity = data.capacity.unwrap_or(existing.capacity);
        let is_active = data.is_active.unwrap_or(existing.is_active);

        let updated: Vec<DiningTable> = self
            .base
            .db()
            .query("UPDATE $thing SET name = $name, branch = $branch, capacity = $capacity, is_active = $is_active")
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("branch", branch))
            .bind(("capacity", capacity))
            .bind(("is_active", is_active))
            .await?
            .take(0)?;
        updated.into_iter().next().ok_or_else(|| not_found(id))
    }

    /// Hard delete a dining table
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }

    async fn existing_branch(&self, branch_id: &str) -> RepoResult<RecordId> {
        let thing = parse_record_id(branch::TABLE, branch_id)?;
        self.ensure_branch(thing).await
    }

    async fn ensure_branch(&self, thing: RecordId) -> RepoResult<RecordId> {
        if thing.table() != branch::TABLE {
            return Err(RepoError::Validation(format!("{} is not a branch ID", thing)));
        }
        let found: Option<Branch> = self.base.db().select(thing.clone()).await?;
        match found {
            Some(_) => Ok(thing),
            None => Err(branch::not_found(&thing.to_string())),
        }
    }
}

fn not_found(id: &str) -> RepoError {
    RepoError::not_found(ErrorCode::TableNotFound, format!("Dining table {} not found", id))
}

fn duplicate(name: &str) -> RepoError {
    RepoError::duplicate(
        ErrorCode::TableNameExists,
        format!("Table '{}' already exists in this branch", name),
    )
}
