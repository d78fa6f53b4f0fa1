//! Role-based authorization gate
//!
//! Roles are compared for equality only; there is no hierarchy. Callers
//! apply the gate before privileged operations (role changes, book creation,
//! bulk import). Domain services do not re-check it.

use crate::{
    error::{AppError, AppResult},
    models::Role,
};

pub fn require_role(caller: Role, required: Role) -> AppResult<()> {
    if caller == required {
        Ok(())
    } else {
        tracing::debug!("Access denied: role {} required, caller has {}", required, caller);
        Err(AppError::Forbidden(format!("{} role required", required)))
    }
}
