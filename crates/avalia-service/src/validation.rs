use validator::Validate;

use avalia_core::error::AppError;
use avalia_core::result::AppResult;

/// Run the derived field checks on `input`, mapping failures to `Validation`.
pub(crate) fn validate<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::validation(format!("Dados inválidos: {e}")))
}
