//! Backend selection.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use avalia_core::config::{DatabaseConfig, DatabaseProvider};
use avalia_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::postgres::{
    PgBehavioralEvaluationRepository, PgCycleRepository, PgDeliverablesEvaluationRepository,
    PgEmployeeRepository, PgGoalRepository,
};
use crate::repository::{
    BehavioralEvaluationRepository, CycleRepository, DeliverablesEvaluationRepository,
    EmployeeRepository, GoalRepository,
};

enum Backend {
    Postgres(DatabasePool),
    Memory,
}

/// One repository per entity, all served by the same backend.
#[derive(Clone)]
pub struct Repositories {
    /// Employee repository.
    pub employees: Arc<dyn EmployeeRepository>,
    /// Cycle repository.
    pub cycles: Arc<dyn CycleRepository>,
    /// Behavioral evaluation repository.
    pub behavioral: Arc<dyn BehavioralEvaluationRepository>,
    /// Deliverables evaluation repository.
    pub deliverables: Arc<dyn DeliverablesEvaluationRepository>,
    /// Goal repository.
    pub goals: Arc<dyn GoalRepository>,
    backend: Arc<Backend>,
}

impl Repositories {
    /// Repositories backed by a PostgreSQL pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            cycles: Arc::new(PgCycleRepository::new(pool.clone())),
            behavioral: Arc::new(PgBehavioralEvaluationRepository::new(pool.clone())),
            deliverables: Arc::new(PgDeliverablesEvaluationRepository::new(pool.clone())),
            goals: Arc::new(PgGoalRepository::new(pool)),
            backend: Arc::new(Backend::Postgres(db)),
        }
    }

    /// Repositories backed by a fresh [`MemoryStore`].
    pub fn memory() -> Self {
        Self::from_store(MemoryStore::new())
    }

    /// Repositories sharing an existing [`MemoryStore`].
    pub fn from_store(store: MemoryStore) -> Self {
        Self {
            employees: Arc::new(store.clone()),
            cycles: Arc::new(store.clone()),
            behavioral: Arc::new(store.clone()),
            deliverables: Arc::new(store.clone()),
            goals: Arc::new(store),
            backend: Arc::new(Backend::Memory),
        }
    }

    /// Build the backend named in `config`, applying migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory database; data is lost on shutdown");
                Ok(Self::memory())
            }
        }
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        match self.backend.as_ref() {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// The PostgreSQL pool, when that backend is active.
    pub fn pool(&self) -> Option<&DatabasePool> {
        match self.backend.as_ref() {
            Backend::Postgres(db) => Some(db),
            Backend::Memory => None,
        }
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<()> {
        match self.backend.as_ref() {
            Backend::Postgres(db) => db.health_check().await,
            Backend::Memory => Ok(()),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Backend::Postgres(db) = self.backend.as_ref() {
            db.close().await;
        }
    }
}

impl fmt::Debug for Repositories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repositories")
            .field("backend", &self.backend_name())
            .finish_non_exhaustive()
    }
}
