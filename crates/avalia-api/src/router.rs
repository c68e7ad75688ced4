//! Route definitions for the Avalia HTTP API.
//!
//! Domain routes are mounted under `/api`; `/health` sits at the root.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(employee_routes())
        .merge(cycle_routes())
        .merge(evaluation_routes())
        .merge(deliverables_routes())
        .merge(goal_routes())
        .merge(result_routes());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Token issuance
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/token", post(handlers::auth::token))
        .route("/auth/login", post(handlers::auth::login))
}

/// Employee registry, reporting line
fn employee_routes() -> Router<AppState> {
    use handlers::employee::*;

    Router::new()
        .route("/colaboradores", get(list_employees).post(create_employee))
        .route("/colaboradores/me", get(me))
        .route(
            "/colaboradores/{matricula}",
            get(get_employee)
                .put(update_employee)
                .delete(deactivate_employee),
        )
        .route("/colaboradores/{matricula}/subordinados", get(subordinates))
        .route("/colaboradores/{matricula}/gestor", get(manager))
}

/// Review cycles
fn cycle_routes() -> Router<AppState> {
    use handlers::cycle::*;

    Router::new()
        .route("/ciclos", get(list_cycles).post(create_cycle))
        .route("/ciclos/ativo", get(active_cycle))
        .route(
            "/ciclos/{id}",
            get(get_cycle).put(update_cycle).delete(delete_cycle),
        )
}

/// Behavioral evaluations
fn evaluation_routes() -> Router<AppState> {
    use handlers::evaluation::*;

    Router::new()
        .route("/avaliacoes", get(list_evaluations).post(create_evaluation))
        .route("/avaliacoes/minhas", get(my_evaluations))
        .route("/avaliacoes/pendentes", get(pending_evaluations))
        .route(
            "/avaliacoes/{id}",
            get(get_evaluation)
                .put(update_evaluation)
                .delete(delete_evaluation),
        )
        .route("/avaliacoes/{id}/concluir", post(complete_evaluation))
}

/// Deliverables evaluations
fn deliverables_routes() -> Router<AppState> {
    use handlers::deliverables::*;

    Router::new()
        .route("/entregas", get(list_deliverables).post(create_deliverables))
        .route("/entregas/minhas", get(my_deliverables))
        .route(
            "/entregas/{id}",
            get(get_deliverables)
                .put(update_deliverables)
                .delete(delete_deliverables),
        )
        .route("/entregas/{id}/concluir", post(complete_deliverables))
}

/// Goals
fn goal_routes() -> Router<AppState> {
    use handlers::goal::*;

    Router::new()
        .route("/metas", get(list_goals).post(create_goal))
        .route("/metas/minhas", get(my_goals))
        .route("/metas/{id}", get(get_goal).put(update_goal).delete(delete_goal))
}

/// Final results
fn result_routes() -> Router<AppState> {
    Router::new().route(
        "/resultados/colaborador/{matricula}/ciclo/{ciclo_id}",
        get(handlers::result::final_result),
    )
}
