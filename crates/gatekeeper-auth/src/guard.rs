//! Role checks against an established [`AuthContext`].
//!
//! Both checks take the context as an `Option` so that a call made without a
//! prior successful authentication rejects instead of allowing.

use crate::claims::Role;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Exact, case-sensitive role match.
pub fn require_role(context: Option<&AuthContext>, required: Role) -> Result<(), AuthError> {
    match context {
        Some(ctx) if ctx.user_type == required => Ok(()),
        Some(ctx) => {
            tracing::debug!(uid = %ctx.uid, role = %ctx.user_type, required = %required, "role check failed");
            Err(AuthError::Forbidden)
        }
        None => {
            tracing::debug!(required = %required, "role check without authenticated context");
            Err(AuthError::Forbidden)
        }
    }
}

/// Ordinary users may only act on their own `uid`; admins may act on any.
pub fn match_user_type_to_uid(
    context: Option<&AuthContext>,
    target_uid: &str,
) -> Result<(), AuthError> {
    let Some(ctx) = context else {
        return Err(AuthError::Forbidden);
    };

    match ctx.user_type {
        Role::Admin => Ok(()),
        Role::Ordinary if ctx.uid == target_uid => Ok(()),
        Role::Ordinary => {
            tracing::debug!(uid = %ctx.uid, target_uid, "ordinary user denied access to another user");
            Err(AuthError::Forbidden)
        }
    }
}
