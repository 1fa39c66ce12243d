//! Unit of work
//!
//! A unit of work is one database transaction. Services receive it by
//! mutable reference and hand its connection to the repositories; the caller
//! decides when to commit. Dropping an uncommitted unit of work rolls the
//! transaction back.

use sqlx::{PgConnection, Postgres, Transaction};
use tracing::debug;
use crate::database::{DatabasePool, connection};
use crate::database::repositories::{
    GroupRepository, StudentRepository, TeacherRepository, SubjectRepository,
    ClassroomRepository, EventRepository,
};
use crate::utils::errors::UniversityError;

/// Shared handle to the connection pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: DatabasePool,
}

impl Database {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Start a new unit of work
    pub async fn begin(&self) -> Result<UnitOfWork, UniversityError> {
        UnitOfWork::begin(&self.pool).await
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), UniversityError> {
        connection::health_check(&self.pool).await
    }
}

/// A scoped transaction shared by every repository call of one operation
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    pub async fn begin(pool: &DatabasePool) -> Result<Self, UniversityError> {
        let tx = pool.begin().await?;
        debug!("Unit of work started");
        Ok(Self { tx })
    }

    /// Make every change of this unit of work visible
    pub async fn commit(self) -> Result<(), UniversityError> {
        self.tx.commit().await?;
        debug!("Unit of work committed");
        Ok(())
    }

    fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub fn groups(&mut self) -> GroupRepository<'_> {
        GroupRepository::new(self.conn())
    }

    pub fn students(&mut self) -> StudentRepository<'_> {
        StudentRepository::new(self.conn())
    }

    pub fn teachers(&mut self) -> TeacherRepository<'_> {
        TeacherRepository::new(self.conn())
    }

    pub fn subjects(&mut self) -> SubjectRepository<'_> {
        SubjectRepository::new(self.conn())
    }

    pub fn classrooms(&mut self) -> ClassroomRepository<'_> {
        ClassroomRepository::new(self.conn())
    }

    pub fn events(&mut self) -> EventRepository<'_> {
        EventRepository::new(self.conn())
    }
}
