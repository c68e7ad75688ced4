//! Repository traits implemented by every persistence backend.
//!
//! Each mutating method is atomic: it either commits all of its effects or
//! none of them. Implementations report store-level rule violations with the
//! matching [`ErrorKind`](avalia_core::ErrorKind): duplicate keys as
//! `Conflict`, dangling references as `NotFound`.

use async_trait::async_trait;

use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_entity::{
    BehavioralEvaluation, BehavioralEvaluationPatch, CreateEmployee, Cycle, CyclePatch,
    DeliverablesEvaluation, DeliverablesEvaluationPatch, Employee, EmployeeChanges,
    EmployeeFilter, EvaluationFilter, Goal, GoalFilter, GoalPatch, NewBehavioralEvaluation,
    NewCycle, NewDeliverablesEvaluation, NewGoal,
};

/// Persistence for employees and their credentials.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by identifier, active or not.
    async fn find_by_matricula(&self, matricula: &str) -> AppResult<Option<Employee>>;

    /// List employees ordered by primary key.
    async fn list(&self, filter: EmployeeFilter, page: PageRequest) -> AppResult<Vec<Employee>>;

    /// List employees whose manager is `gestor_matricula`.
    async fn list_subordinates(
        &self,
        gestor_matricula: &str,
        filter: EmployeeFilter,
    ) -> AppResult<Vec<Employee>>;

    /// Insert a new employee.
    ///
    /// `Conflict` on duplicate `matricula`/`email`; `NotFound` when the
    /// manager does not exist.
    async fn create(&self, data: CreateEmployee) -> AppResult<Employee>;

    /// Apply `changes` to the employee under a row lock.
    async fn update(&self, matricula: &str, changes: EmployeeChanges) -> AppResult<Employee>;

    /// Soft-delete: flip `ativo` to false. `Conflict` if already inactive.
    async fn deactivate(&self, matricula: &str) -> AppResult<Employee>;
}

/// Persistence for review cycles.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// Find a cycle by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cycle>>;

    /// The `em_andamento` cycle with the greatest year.
    async fn find_active(&self) -> AppResult<Option<Cycle>>;

    /// List cycles ordered by primary key.
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Cycle>>;

    /// Insert a new cycle. `Conflict` on duplicate year.
    async fn create(&self, data: NewCycle) -> AppResult<Cycle>;

    /// Apply `patch` under a row lock.
    async fn update(&self, id: i32, patch: CyclePatch) -> AppResult<Cycle>;

    /// Hard delete. `Conflict` while evaluations or goals still reference it.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Persistence for behavioral evaluations.
#[async_trait]
pub trait BehavioralEvaluationRepository: Send + Sync {
    /// Find an evaluation by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BehavioralEvaluation>>;

    /// List evaluations matching `filter`, ordered by primary key.
    async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<BehavioralEvaluation>>;

    /// Insert a new evaluation. `NotFound` on a dangling cycle or employee.
    async fn create(&self, data: NewBehavioralEvaluation) -> AppResult<BehavioralEvaluation>;

    /// Apply `patch` under a row lock.
    async fn update(
        &self,
        id: i32,
        patch: BehavioralEvaluationPatch,
    ) -> AppResult<BehavioralEvaluation>;

    /// Mark as `concluida`. `Conflict` if it already is.
    async fn complete(&self, id: i32) -> AppResult<BehavioralEvaluation>;

    /// Hard delete.
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// `media_competencias` of every evaluation of `matricula` in `ciclo_id`.
    async fn averages_for(&self, matricula: &str, ciclo_id: i32) -> AppResult<Vec<f64>>;
}

/// Persistence for deliverables evaluations.
#[async_trait]
pub trait DeliverablesEvaluationRepository: Send + Sync {
    /// Find an evaluation by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<DeliverablesEvaluation>>;

    /// List evaluations matching `filter`, ordered by primary key.
    async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<DeliverablesEvaluation>>;

    /// Insert a new evaluation. `NotFound` on a dangling cycle or employee.
    async fn create(&self, data: NewDeliverablesEvaluation) -> AppResult<DeliverablesEvaluation>;

    /// Apply `patch` under a row lock.
    async fn update(
        &self,
        id: i32,
        patch: DeliverablesEvaluationPatch,
    ) -> AppResult<DeliverablesEvaluation>;

    /// Mark as `concluida`. `Conflict` if it already is.
    async fn complete(&self, id: i32) -> AppResult<DeliverablesEvaluation>;

    /// Hard delete.
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// `media_entregas` of every evaluation of `matricula` in `ciclo_id`.
    async fn averages_for(&self, matricula: &str, ciclo_id: i32) -> AppResult<Vec<f64>>;
}

/// Persistence for goals.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find a goal by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Goal>>;

    /// List goals matching `filter`, ordered by primary key.
    async fn list(&self, filter: &GoalFilter, page: PageRequest) -> AppResult<Vec<Goal>>;

    /// Insert a new goal. `NotFound` on a dangling cycle or employee.
    async fn create(&self, data: NewGoal) -> AppResult<Goal>;

    /// Apply `patch` under a row lock.
    async fn update(&self, id: i32, patch: GoalPatch) -> AppResult<Goal>;

    /// Hard delete.
    async fn delete(&self, id: i32) -> AppResult<()>;
}
