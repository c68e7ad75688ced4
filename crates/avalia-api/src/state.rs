//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use avalia_auth::{AccessGuard, AccessPolicy, SessionIssuer};
use avalia_core::config::AppConfig;
use avalia_database::Repositories;
use avalia_service::{
    BehavioralEvaluationService, CycleService, DeliverablesEvaluationService, EmployeeService,
    GoalService, ResultService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Repository set over the configured backend
    pub repos: Repositories,

    // ── Auth ─────────────────────────────────────────────────
    /// Credential check and token issuance
    pub session_issuer: Arc<SessionIssuer>,
    /// Bearer token resolution
    pub access_guard: Arc<AccessGuard>,

    // ── Services ─────────────────────────────────────────────
    pub employee_service: Arc<EmployeeService>,
    pub cycle_service: Arc<CycleService>,
    pub behavioral_service: Arc<BehavioralEvaluationService>,
    pub deliverables_service: Arc<DeliverablesEvaluationService>,
    pub goal_service: Arc<GoalService>,
    pub result_service: Arc<ResultService>,
}

impl AppState {
    /// Wire every service over `repos`.
    pub fn new(config: AppConfig, repos: Repositories) -> Self {
        let auth = &config.auth;

        let session_issuer = Arc::new(SessionIssuer::new(repos.employees.clone(), auth));
        let access_guard = Arc::new(AccessGuard::new(repos.employees.clone(), auth));

        let employee_service = Arc::new(EmployeeService::new(repos.employees.clone(), auth));
        let cycle_service = Arc::new(CycleService::new(repos.cycles.clone()));
        let behavioral_service = Arc::new(BehavioralEvaluationService::new(
            repos.behavioral.clone(),
            repos.cycles.clone(),
            repos.employees.clone(),
        ));
        let deliverables_service = Arc::new(DeliverablesEvaluationService::new(
            repos.deliverables.clone(),
            repos.cycles.clone(),
            repos.employees.clone(),
        ));
        let goal_service = Arc::new(GoalService::new(
            repos.goals.clone(),
            repos.cycles.clone(),
            repos.employees.clone(),
        ));
        let result_service = Arc::new(ResultService::new(
            repos.employees.clone(),
            repos.cycles.clone(),
            repos.behavioral.clone(),
            repos.deliverables.clone(),
            AccessPolicy::new(auth),
        ));

        Self {
            config: Arc::new(config),
            repos,
            session_issuer,
            access_guard,
            employee_service,
            cycle_service,
            behavioral_service,
            deliverables_service,
            goal_service,
            result_service,
        }
    }
}
