//! `AuthUser` extractor: resolves the bearer token into a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use avalia_core::error::AppError;
use avalia_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated employee context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthenticated("Não autenticado"))?;

        let employee = state.access_guard.authenticate(bearer.token()).await?;
        Ok(AuthUser(RequestContext::new(employee)))
    }
}
