//! Request context carrying the authenticated employee.

use chrono::{DateTime, Utc};

use avalia_entity::Employee;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer once the bearer token has been resolved and
/// passed into caller-scoped service methods.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated employee.
    pub employee: Employee,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(employee: Employee) -> Self {
        Self {
            employee,
            request_time: Utc::now(),
        }
    }

    /// The caller's identifier.
    pub fn matricula(&self) -> &str {
        &self.employee.matricula
    }
}
