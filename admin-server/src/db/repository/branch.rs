//! Branch Repository

use super::{BaseRepository, DiningTableRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Branch, BranchCreate, BranchUpdate};
use shared::error::ErrorCode;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "branch";

#[derive(Clone)]
pub struct BranchRepository {
    base: BaseRepository,
}

impl BranchRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active branches
    pub async fn find_all(&self) -> RepoResult<Vec<Branch>> {
        let branches: Vec<Branch> = self
            .base
            .db()
            .query("SELECT * FROM branch WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(branches)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Branch>> {
        let thing = parse_record_id(TABLE, id)?;
        let branch: Option<Branch> = self.base.db().select(thing).await?;
        Ok(branch)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Branch>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM branch WHERE name = $name")
            .bind(("name", name.to_string()))
            .await?;
        let branches: Vec<Branch> = result.take(0)?;
        Ok(branches.into_iter().next())
    }

    /// Create a new branch
    pub async fn create(&self, data: BranchCreate) -> RepoResult<Branch> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(duplicate(&data.name));
        }

        let branch = Branch {
            id: None,
            name: data.name,
            address: data.address,
            phone: data.phone,
            is_active: true,
        };

        let created: Vec<Branch> = self
            .base
            .db()
            .query("CREATE branch CONTENT $data")
            .bind(("data", branch))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create branch".to_string()))
    }

    /// Update a branch
    pub async fn update(&self, id: &str, data: BranchUpdate) -> RepoResult<Branch> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if let Some(name) = &data.name
            && let Some(found) = self.find_by_name(name).await?
            && found.id != existing.id
        {
            return Err(duplicate(name));
        }

        let updated: Vec<Branch> = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?
            .take(0)?;
        updated.into_iter().next().ok_or_else(|| not_found(id))
    }

    /// Hard delete a branch
    ///
    /// Refused with `BranchHasTables` while any dining table references it.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let tables = DiningTableRepository::new(self.base.db().clone())
            .count_by_branch(&thing)
            .await?;
        if tables > 0 {
            return Err(RepoError::conflict(
                ErrorCode::BranchHasTables,
                format!("Branch {} still has {} table(s)", id, tables),
            ));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }
}

pub(crate) fn not_found(id: &str) -> RepoError {
    RepoError::not_found(ErrorCode::BranchNotFound, format!("Branch {} not found", id))
}

fn duplicate(name: &str) -> RepoError {
    RepoError::duplicate(
        ErrorCode::BranchNameExists,
        format!("Branch '{}' already exists", name),
    )
}
