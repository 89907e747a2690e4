//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::employee::DEFAULT_ROLE;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::error::ErrorCode;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active employees
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE is_active = true ORDER BY username")
            .await?
            .take(0)?;
        Ok(employees)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_record_id(TABLE, id)?;
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE username = $username")
            .bind(("username", username.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::duplicate(
                ErrorCode::EmployeeUsernameExists,
                format!("Employee '{}' already exists", data.username),
            ));
        }

        let employee = Employee {
            id: None,
            username: data.username,
            display_name: data.display_name,
            role: data.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            phone: data.phone,
            is_active: true,
        };

        let created: Vec<Employee> = self
            .base
            .db()
            .query("CREATE employee CONTENT $data")
            .bind(("data", employee))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = parse_record_id(TABLE, id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let updated: Vec<Employee> = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?
            .take(0)?;
        updated.into_iter().next().ok_or_else(|| not_found(id))
    }

    /// Hard delete an employee
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
}

fn not_found(id: &str) -> RepoError {
    RepoError::not_found(ErrorCode::EmployeeNotFound, format!("Employee {} not found", id))
}
