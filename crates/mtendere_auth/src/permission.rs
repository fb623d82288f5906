use mtendere_error::error::ValidationError;
use mtendere_types::enums::UserRole;

/// The fixed permission catalog role bundles draw from. Role payloads
/// naming anything outside this list are rejected.
pub const AVAILABLE_PERMISSIONS: &[&str] = &[
    "view_dashboard",
    "manage_scholarships",
    "manage_jobs",
    "manage_partners",
    "manage_blog",
    "manage_team",
    "manage_users",
    "review_applications",
    "manage_roles",
    "view_analytics",
];

pub fn is_known_permission(permission: &str) -> bool {
    AVAILABLE_PERMISSIONS.contains(&permission)
}

/// Reject any permission string outside the catalog.
pub fn validate_permissions(permissions: &[String]) -> Result<(), ValidationError> {
    for permission in permissions {
        if !is_known_permission(permission) {
            return Err(ValidationError::UnknownPermission(permission.clone()));
        }
    }
    Ok(())
}

pub fn has_permission(role: UserRole, permission: &str) -> bool {
    // admins hold every catalog permission; moderators hold the
    // review/read bundle
    match role {
        UserRole::Admin | UserRole::SuperAdmin => is_known_permission(permission),
        UserRole::Moderator => matches!(
            permission,
            "view_dashboard" | "review_applications" | "view_analytics"
        ),
        UserRole::User => false,
    }
}
