//! User model -> entity mapper

use care_core::{DomainError, MembershipTier, RepoResult, Snowflake, User, UserRole};

use crate::models::UserModel;

/// Convert a users row to a User entity
pub fn user_from_model(model: UserModel) -> RepoResult<User> {
    let role = UserRole::parse(&model.role)
        .ok_or_else(|| DomainError::DatabaseError(format!("unknown user role '{}'", model.role)))?;
    let membership_tier = MembershipTier::parse(&model.membership_tier).ok_or_else(|| {
        DomainError::DatabaseError(format!(
            "unknown membership tier '{}'",
            model.membership_tier
        ))
    })?;

    Ok(User {
        id: Snowflake::new(model.id),
        name: model.name,
        email: model.email,
        role,
        membership_tier,
        medical_flags: model.medical_flags.0,
        linked_account_id: model.linked_account_id.map(Snowflake::new),
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
