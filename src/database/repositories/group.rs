//! Group repository implementation

use sqlx::PgConnection;
use crate::models::group::{Group, NewGroup};
use crate::utils::errors::UniversityError;
use super::violated_constraint;

const SELECT_GROUP: &str = "SELECT group_id AS id, group_name AS name FROM groups";

pub struct GroupRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> GroupRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new group
    pub async fn save(&mut self, group: &NewGroup) -> Result<Group, UniversityError> {
        let group = sqlx::query_as::<_, Group>(
            "INSERT INTO groups (group_name) VALUES ($1) RETURNING group_id AS id, group_name AS name"
        )
        .bind(&group.name)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| name_taken(e, &group.name))?;

        Ok(group)
    }

    /// Find group by ID
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Group>, UniversityError> {
        let group = sqlx::query_as::<_, Group>(&format!("{} WHERE group_id = $1", SELECT_GROUP))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(group)
    }

    /// Find group by its exact name
    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<Group>, UniversityError> {
        let group = sqlx::query_as::<_, Group>(&format!("{} WHERE group_name = $1", SELECT_GROUP))
            .bind(name)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(group)
    }

    /// Check if a group exists
    pub async fn exists_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM groups WHERE group_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// Check if another group already uses this name
    pub async fn exists_by_name(&mut self, name: &str, excluding_id: Option<i32>) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE group_name = $1 AND ($2::INTEGER IS NULL OR group_id <> $2))"
        )
        .bind(name)
        .bind(excluding_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(exists)
    }

    /// List all groups ordered by name
    pub async fn find_all(&mut self) -> Result<Vec<Group>, UniversityError> {
        let groups = sqlx::query_as::<_, Group>(&format!("{} ORDER BY group_name ASC", SELECT_GROUP))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(groups)
    }

    /// Count total groups
    pub async fn count(&mut self) -> Result<i64, UniversityError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM groups")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    /// Update group, `None` when the id does not exist
    pub async fn update(&mut self, id: i32, group: &NewGroup) -> Result<Option<Group>, UniversityError> {
        let group = sqlx::query_as::<_, Group>(
            "UPDATE groups SET group_name = $2 WHERE group_id = $1 RETURNING group_id AS id, group_name AS name"
        )
        .bind(id)
        .bind(&group.name)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| name_taken(e, &group.name))?;

        Ok(group)
    }

    /// Delete group, returns whether a row was removed
    ///
    /// Students of the group keep existing with no group.
    pub async fn delete_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query("DELETE FROM groups WHERE group_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every group
    pub async fn delete_all(&mut self) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM groups")
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

fn name_taken(err: sqlx::Error, name: &str) -> UniversityError {
    if violated_constraint(&err) == Some("groups_group_name_key") {
        UniversityError::GroupNameTaken { name: name.to_string() }
    } else {
        err.into()
    }
}
