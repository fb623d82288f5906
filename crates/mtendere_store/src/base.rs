use async_trait::async_trait;
use mtendere_error::error::StoreError;
use mtendere_types::contracts::{PageQuery, UpdateRoleRequest, UpdateUserRequest};
use mtendere_types::entities::{ManagedEntity, Role, User};
use uuid::Uuid;

/// Storage contract for one managed-entity collection. Route handlers are
/// written against this trait, so swapping the in-memory collections for a
/// real datastore is a new implementation, not a contract change.
#[async_trait]
pub trait CollectionStore<T: ManagedEntity>: Send + Sync {
    /// One page of records in insertion order, with the full matching
    /// count. Out-of-range pages return an empty page and the true total.
    async fn list(&self, query: &PageQuery) -> (Vec<T>, usize);

    /// The unauthenticated variant: only publicly visible records, the
    /// `status` filter ignored in favor of the entity's visibility flag.
    async fn list_public(&self, query: &PageQuery) -> (Vec<T>, usize);

    async fn get(&self, id: Uuid) -> Result<T, StoreError>;

    async fn create(&self, payload: T::Create, created_by: Option<Uuid>) -> T;

    async fn update(&self, id: Uuid, patch: T::Patch) -> Result<T, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn count(&self) -> usize;
}

/// Users get a dedicated contract: unique email/username enforcement and
/// credential-hash handling do not fit the generic collection shape.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self, query: &PageQuery) -> (Vec<User>, usize);

    async fn get(&self, id: Uuid) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// Insert, failing when the email or username is already taken. The
    /// uniqueness check runs inside the same critical section as the
    /// append.
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// Partial update; `password_hash`, when supplied, replaces the stored
    /// hash (the caller has already hashed it).
    async fn update(
        &self,
        id: Uuid,
        patch: UpdateUserRequest,
        password_hash: Option<String>,
    ) -> Result<User, StoreError>;

    /// Soft-deactivation: users are never removed, only flagged inactive,
    /// so records referencing them as creator stay resolvable.
    async fn deactivate(&self, id: Uuid) -> Result<User, StoreError>;

    async fn count(&self) -> usize;
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn list(&self, query: &PageQuery) -> (Vec<Role>, usize);

    async fn insert(&self, role: Role) -> Result<Role, StoreError>;

    async fn update(&self, id: Uuid, patch: UpdateRoleRequest) -> Result<Role, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
