//! Test database helper utilities
//!
//! `TEST_DATABASE_URL` wins when set; otherwise a throwaway PostgreSQL
//! container is started. The container handle is kept so the database lives
//! as long as the helper.

use std::sync::Once;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use university_schedule::database::{run_migrations, Database, UnitOfWork};
use university_schedule::services::ServiceFactory;

static INIT: Once = Once::new();

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database: Database,
    pub services: ServiceFactory,
    _container: Option<ContainerAsync<PostgresImage>>,
}

impl TestDatabase {
    /// Connect, migrate and clean; `None` when no database can be reached
    pub async fn try_new() -> Option<Self> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        });

        match Self::new().await {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::warn!("Skipping database test, no PostgreSQL available: {}", e);
                None
            }
        }
    }

    async fn new() -> anyhow::Result<Self> {
        let (database_url, container) = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => (url, None),
            Err(_) => {
                let container = PostgresImage::default().start().await?;
                let host = container.get_host().await?;
                let port = container.get_host_port_ipv4(5432).await?;
                let url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);
                (url, Some(container))
            }
        };

        let pool = PgPool::connect(&database_url).await?;
        run_migrations(&pool).await?;

        let db = Self {
            database: Database::new(pool.clone()),
            pool,
            services: ServiceFactory::new(),
            _container: container,
        };
        db.cleanup().await?;

        Ok(db)
    }

    /// Start a unit of work against the test database
    pub async fn uow(&self) -> UnitOfWork {
        self.database.begin().await.expect("Failed to begin unit of work")
    }

    /// Clean all test data from the database
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            TRUNCATE events, teachers_subjects, students, teachers, subjects, classrooms, groups
            RESTART IDENTITY CASCADE
            "#
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Count rows of a table outside any unit of work
    pub async fn count_records(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count records")
    }
}
