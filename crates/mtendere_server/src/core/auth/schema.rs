use mtendere_types::enums::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity attached to the request by the auth middleware, read by
/// handlers to stamp `created_by`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}
