use crate::base::{CollectionStore, RoleStore, UserStore};
use async_trait::async_trait;
use mtendere_error::error::StoreError;
use mtendere_types::contracts::{PageQuery, UpdateRoleRequest, UpdateUserRequest};
use mtendere_types::entities::{
    Application, BlogPost, Job, ManagedEntity, Partner, Role, Scholarship, TeamMember,
    Testimonial, User,
};
use mtendere_utils::utils::get_utc_datetime;
use tokio::sync::RwLock;
use uuid::Uuid;

fn paginate<T: Clone>(matching: Vec<&T>, query: &PageQuery) -> (Vec<T>, usize) {
    let total = matching.len();
    let (page, limit) = query.normalize();

    let items = matching
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    (items, total)
}

fn active_filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// In-memory collection for one managed-entity kind. Every mutation runs
/// inside a single write-guard critical section, so concurrent writes
/// against the same record are serialized rather than lost.
pub struct MemoryCollection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: ManagedEntity> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: ManagedEntity> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: ManagedEntity> CollectionStore<T> for MemoryCollection<T> {
    async fn list(&self, query: &PageQuery) -> (Vec<T>, usize) {
        let records = self.records.read().await;

        let status = active_filter(&query.status);
        let search = active_filter(&query.search);

        let matching: Vec<&T> = records
            .iter()
            .filter(|r| status.map_or(true, |s| r.matches_status(s)))
            .filter(|r| search.map_or(true, |s| r.matches_search(s)))
            .collect();

        paginate(matching, query)
    }

    async fn list_public(&self, query: &PageQuery) -> (Vec<T>, usize) {
        let records = self.records.read().await;

        let search = active_filter(&query.search);

        let matching: Vec<&T> = records
            .iter()
            .filter(|r| r.is_public())
            .filter(|r| search.map_or(true, |s| r.matches_search(s)))
            .collect();

        paginate(matching, query)
    }

    async fn get(&self, id: Uuid) -> Result<T, StoreError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(T::KIND, id.to_string()))
    }

    async fn create(&self, payload: T::Create, created_by: Option<Uuid>) -> T {
        let record = T::from_payload(payload, created_by);
        let mut records = self.records.write().await;
        records.push(record.clone());
        record
    }

    async fn update(&self, id: Uuid, patch: T::Patch) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(T::KIND, id.to_string()))?;

        record.apply_patch(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(T::KIND, id.to_string()))?;

        records.remove(index);
        Ok(())
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

pub struct MemoryUsers {
    records: RwLock<Vec<User>>,
}

impl MemoryUsers {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryUsers {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn list(&self, query: &PageQuery) -> (Vec<User>, usize) {
        let records = self.records.read().await;

        let search = active_filter(&query.search);
        let status = active_filter(&query.status);

        let matching: Vec<&User> = records
            .iter()
            .filter(|u| match status {
                Some("active") => u.is_active,
                Some("inactive") => !u.is_active,
                Some(role) => u.role.as_str() == role,
                None => true,
            })
            .filter(|u| search.map_or(true, |s| u.matches_search(s)))
            .collect();

        paginate(matching, query)
    }

    async fn get(&self, id: Uuid) -> Result<User, StoreError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("User", id.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let records = self.records.read().await;
        records.iter().find(|u| u.email == email).cloned()
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut records = self.records.write().await;

        if records.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("User", user.email));
        }
        if records.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate("User", user.username));
        }

        records.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: UpdateUserRequest,
        password_hash: Option<String>,
    ) -> Result<User, StoreError> {
        let mut records = self.records.write().await;

        if let Some(email) = &patch.email {
            if records.iter().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::Duplicate("User", email.clone()));
            }
        }
        if let Some(username) = &patch.username {
            if records.iter().any(|u| u.id != id && &u.username == username) {
                return Err(StoreError::Duplicate("User", username.clone()));
            }
        }

        let user = records
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::NotFound("User", id.to_string()))?;

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.updated_at = get_utc_datetime();

        Ok(user.clone())
    }

    async fn deactivate(&self, id: Uuid) -> Result<User, StoreError> {
        let mut records = self.records.write().await;
        let user = records
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::NotFound("User", id.to_string()))?;

        user.is_active = false;
        user.updated_at = get_utc_datetime();

        Ok(user.clone())
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

pub struct MemoryRoles {
    records: RwLock<Vec<Role>>,
}

impl MemoryRoles {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryRoles {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleStore for MemoryRoles {
    async fn list(&self, query: &PageQuery) -> (Vec<Role>, usize) {
        let records = self.records.read().await;

        let search = active_filter(&query.search);

        let matching: Vec<&Role> = records
            .iter()
            .filter(|r| {
                search.map_or(true, |s| {
                    r.name.to_lowercase().contains(&s.to_lowercase())
                })
            })
            .collect();

        paginate(matching, query)
    }

    async fn insert(&self, role: Role) -> Result<Role, StoreError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.name == role.name) {
            return Err(StoreError::Duplicate("Role", role.name));
        }

        records.push(role.clone());
        Ok(role)
    }

    async fn update(&self, id: Uuid, patch: UpdateRoleRequest) -> Result<Role, StoreError> {
        let mut records = self.records.write().await;

        if let Some(name) = &patch.name {
            if records.iter().any(|r| r.id != id && &r.name == name) {
                return Err(StoreError::Duplicate("Role", name.clone()));
            }
        }

        let role = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound("Role", id.to_string()))?;

        if let Some(name) = patch.name {
            role.name = name;
        }
        if let Some(description) = patch.description {
            role.description = description;
        }
        if let Some(permissions) = patch.permissions {
            role.permissions = permissions;
        }
        role.updated_at = get_utc_datetime();

        Ok(role.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound("Role", id.to_string()))?;

        records.remove(index);
        Ok(())
    }
}

/// Process-wide state: one collection per managed resource. Populated
/// empty at startup, discarded at process end.
pub struct MemoryStore {
    pub users: MemoryUsers,
    pub roles: MemoryRoles,
    pub scholarships: MemoryCollection<Scholarship>,
    pub jobs: MemoryCollection<Job>,
    pub applications: MemoryCollection<Application>,
    pub partners: MemoryCollection<Partner>,
    pub testimonials: MemoryCollection<Testimonial>,
    pub blog_posts: MemoryCollection<BlogPost>,
    pub team_members: MemoryCollection<TeamMember>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: MemoryUsers::new(),
            roles: MemoryRoles::new(),
            scholarships: MemoryCollection::new(),
            jobs: MemoryCollection::new(),
            applications: MemoryCollection::new(),
            partners: MemoryCollection::new(),
            testimonials: MemoryCollection::new(),
            blog_posts: MemoryCollection::new(),
            team_members: MemoryCollection::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
