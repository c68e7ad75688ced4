//! PostgreSQL repository implementations.

pub mod behavioral;
pub mod cycle;
pub mod deliverables;
pub mod employee;
pub mod goal;

pub use behavioral::PgBehavioralEvaluationRepository;
pub use cycle::PgCycleRepository;
pub use deliverables::PgDeliverablesEvaluationRepository;
pub use employee::PgEmployeeRepository;
pub use goal::PgGoalRepository;

use avalia_core::error::{AppError, ErrorKind};

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Translate a sqlx error into an [`AppError`].
///
/// Constraint violations become domain errors keyed on the constraint name
/// declared in the migrations; everything else is a `Database` error carrying
/// `context`.
pub(crate) fn map_db_error(e: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        let constraint = db.constraint().unwrap_or_default();
        match db.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return AppError::conflict(conflict_message(constraint)),
            Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::not_found(missing_reference_message(constraint));
            }
            Some(CHECK_VIOLATION) => {
                return AppError::validation(format!("Dados inválidos ({constraint})"));
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}

fn conflict_message(constraint: &str) -> &'static str {
    match constraint {
        "uq_colaborador_matricula" => "Matrícula já cadastrada",
        "uq_colaborador_email" => "Email já cadastrado",
        "uq_ciclo_ano" => "Já existe um ciclo para este ano",
        _ => "Registro duplicado",
    }
}

fn missing_reference_message(constraint: &str) -> &'static str {
    match constraint {
        "fk_avaliacao_ciclo" | "fk_entrega_ciclo" | "fk_meta_ciclo" => "Ciclo não encontrado",
        "fk_avaliacao_avaliado" | "fk_entrega_avaliado" => "Colaborador avaliado não encontrado",
        "fk_meta_colaborador" => "Colaborador não encontrado",
        "fk_avaliacao_avaliador" | "fk_entrega_avaliador" => "Colaborador avaliador não encontrado",
        _ => "Registro relacionado não encontrado",
    }
}

/// Whether `e` is a foreign-key violation, as raised when deleting a row
/// that is still referenced.
pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION))
}
