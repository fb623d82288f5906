use chrono::NaiveDateTime;
use mtendere_utils::utils::get_utc_datetime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contracts::*;
use crate::enums::{ApplicationStatus, JobType, PublishStatus, UserRole};

/// The generic CRUD contract every managed resource satisfies. The store
/// and the admin routes are written against this trait, so adding an
/// entity kind means implementing it and registering a router.
pub trait ManagedEntity: Clone + Serialize + Send + Sync + 'static {
    type Create: DeserializeOwned + Send + 'static;
    type Patch: DeserializeOwned + Send + 'static;

    /// Singular kind name used in NotFound messages.
    const KIND: &'static str;

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self;
    fn id(&self) -> Uuid;

    /// Merge supplied fields onto the record. Implementations must leave
    /// absent fields untouched and refresh `updated_at`.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Case-insensitive free-text match over the entity's primary text
    /// fields.
    fn matches_search(&self, term: &str) -> bool;

    /// Match against the `status` list-filter query parameter.
    fn matches_status(&self, status: &str) -> bool;

    /// Whether the unauthenticated read variant may expose this record.
    fn is_public(&self) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    // never serialized; responses carry UserProfile instead
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub fn new(
        email: String,
        username: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        let now = get_utc_datetime();
        User {
            id: Uuid::new_v4(),
            email,
            username,
            first_name,
            last_name,
            password_hash,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.email, term)
            || contains_ci(&self.username, term)
            || contains_ci(&self.first_name, term)
            || contains_ci(&self.last_name, term)
    }
}

/// User view safe for client responses -- no password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub eligibility: String,
    pub amount: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub category: String,
    pub institution: String,
    pub status: PublishStatus,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for Scholarship {
    type Create = CreateScholarshipRequest;
    type Patch = UpdateScholarshipRequest;

    const KIND: &'static str = "Scholarship";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        Scholarship {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            eligibility: payload.eligibility,
            amount: payload.amount,
            deadline: payload.deadline,
            category: payload.category,
            institution: payload.institution,
            status: payload.status.unwrap_or_default(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(eligibility) = patch.eligibility {
            self.eligibility = eligibility;
        }
        if let Some(amount) = patch.amount {
            self.amount = Some(amount);
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = Some(deadline);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(institution) = patch.institution {
            self.institution = institution;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.title, term)
            || contains_ci(&self.institution, term)
            || contains_ci(&self.category, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        self.status.as_str() == status
    }

    fn is_public(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_range: Option<String>,
    pub description: String,
    pub benefits: Option<String>,
    pub application_url: Option<String>,
    pub status: PublishStatus,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for Job {
    type Create = CreateJobRequest;
    type Patch = UpdateJobRequest;

    const KIND: &'static str = "Job";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        Job {
            id: Uuid::new_v4(),
            title: payload.title,
            company: payload.company,
            location: payload.location,
            job_type: payload.job_type,
            salary_range: payload.salary_range,
            description: payload.description,
            benefits: payload.benefits,
            application_url: payload.application_url,
            status: payload.status.unwrap_or_default(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(job_type) = patch.job_type {
            self.job_type = job_type;
        }
        if let Some(salary_range) = patch.salary_range {
            self.salary_range = Some(salary_range);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(benefits) = patch.benefits {
            self.benefits = Some(benefits);
        }
        if let Some(application_url) = patch.application_url {
            self.application_url = Some(application_url);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.title, term)
            || contains_ci(&self.company, term)
            || contains_ci(&self.location, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        self.status.as_str() == status
    }

    fn is_public(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub scholarship_id: Option<Uuid>,
    pub applicant_name: String,
    pub applicant_email: String,
    pub motivation: Option<String>,
    pub status: ApplicationStatus,
    pub review_notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for Application {
    type Create = CreateApplicationRequest;
    type Patch = UpdateApplicationRequest;

    const KIND: &'static str = "Application";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        Application {
            id: Uuid::new_v4(),
            scholarship_id: payload.scholarship_id,
            applicant_name: payload.applicant_name,
            applicant_email: payload.applicant_email,
            motivation: payload.motivation,
            status: ApplicationStatus::Pending,
            review_notes: None,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(review_notes) = patch.review_notes {
            self.review_notes = Some(review_notes);
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.applicant_name, term) || contains_ci(&self.applicant_email, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        self.status.as_str() == status
    }

    // applications are never publicly listed
    fn is_public(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub partnership_type: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for Partner {
    type Create = CreatePartnerRequest;
    type Patch = UpdatePartnerRequest;

    const KIND: &'static str = "Partner";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        Partner {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description,
            partnership_type: payload.partnership_type,
            address: payload.address,
            website: payload.website,
            contact_email: payload.contact_email,
            is_active: payload.is_active.unwrap_or(true),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(partnership_type) = patch.partnership_type {
            self.partnership_type = partnership_type;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(website) = patch.website {
            self.website = Some(website);
        }
        if let Some(contact_email) = patch.contact_email {
            self.contact_email = Some(contact_email);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.name, term) || contains_ci(&self.partnership_type, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        match status {
            "active" => self.is_active,
            "inactive" => !self.is_active,
            _ => false,
        }
    }

    fn is_public(&self) -> bool {
        self.is_active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub author_name: String,
    pub author_title: Option<String>,
    pub quote: String,
    pub is_approved: bool,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for Testimonial {
    type Create = CreateTestimonialRequest;
    type Patch = UpdateTestimonialRequest;

    const KIND: &'static str = "Testimonial";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        Testimonial {
            id: Uuid::new_v4(),
            author_name: payload.author_name,
            author_title: payload.author_title,
            quote: payload.quote,
            is_approved: payload.is_approved.unwrap_or(false),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(author_name) = patch.author_name {
            self.author_name = author_name;
        }
        if let Some(author_title) = patch.author_title {
            self.author_title = Some(author_title);
        }
        if let Some(quote) = patch.quote {
            self.quote = quote;
        }
        if let Some(is_approved) = patch.is_approved {
            self.is_approved = is_approved;
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.author_name, term) || contains_ci(&self.quote, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        match status {
            "approved" => self.is_approved,
            "pending" => !self.is_approved,
            _ => false,
        }
    }

    fn is_public(&self) -> bool {
        self.is_approved
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub status: PublishStatus,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for BlogPost {
    type Create = CreateBlogPostRequest;
    type Patch = UpdateBlogPostRequest;

    const KIND: &'static str = "Blog post";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        let slug = match payload.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => mtendere_utils::utils::slugify(&payload.title),
        };
        BlogPost {
            id: Uuid::new_v4(),
            title: payload.title,
            slug,
            excerpt: payload.excerpt,
            content: payload.content,
            category: payload.category,
            status: payload.status.unwrap_or_default(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = Some(excerpt);
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.title, term)
            || contains_ci(&self.slug, term)
            || contains_ci(&self.category, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        self.status.as_str() == status
    }

    fn is_public(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ManagedEntity for TeamMember {
    type Create = CreateTeamMemberRequest;
    type Patch = UpdateTeamMemberRequest;

    const KIND: &'static str = "Team member";

    fn from_payload(payload: Self::Create, created_by: Option<Uuid>) -> Self {
        let now = get_utc_datetime();
        TeamMember {
            id: Uuid::new_v4(),
            name: payload.name,
            position: payload.position,
            department: payload.department,
            email: payload.email,
            bio: payload.bio,
            is_active: payload.is_active.unwrap_or(true),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(department) = patch.department {
            self.department = Some(department);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = get_utc_datetime();
    }

    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.name, term) || contains_ci(&self.position, term)
    }

    fn matches_status(&self, status: &str) -> bool {
        match status {
            "active" => self.is_active,
            "inactive" => !self.is_active,
            _ => false,
        }
    }

    fn is_public(&self) -> bool {
        self.is_active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Role {
    pub fn new(name: String, description: String, permissions: Vec<String>) -> Self {
        let now = get_utc_datetime();
        Role {
            id: Uuid::new_v4(),
            name,
            description,
            permissions,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scholarship() -> Scholarship {
        Scholarship::from_payload(
            CreateScholarshipRequest {
                title: "STEM Women Fellowship".to_string(),
                description: "Full ride for women in STEM".to_string(),
                eligibility: "Female undergraduates".to_string(),
                amount: Some("5000".to_string()),
                deadline: None,
                category: "STEM".to_string(),
                institution: "University of Malawi".to_string(),
                status: Some(PublishStatus::Published),
            },
            None,
        )
    }

    #[test]
    fn test_patch_merges_only_supplied_fields() {
        let mut s = scholarship();
        let before = s.clone();

        s.apply_patch(UpdateScholarshipRequest {
            status: Some(PublishStatus::Archived),
            ..Default::default()
        });

        assert_eq!(s.status, PublishStatus::Archived);
        assert_eq!(s.title, before.title);
        assert_eq!(s.amount, before.amount);
        assert_eq!(s.created_at, before.created_at);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let s = scholarship();
        assert!(s.matches_search("stem"));
        assert!(s.matches_search("malawi"));
        assert!(!s.matches_search("medicine"));
    }

    #[test]
    fn test_public_visibility_tracks_publish_status() {
        let mut s = scholarship();
        assert!(s.is_public());

        s.apply_patch(UpdateScholarshipRequest {
            status: Some(PublishStatus::Draft),
            ..Default::default()
        });
        assert!(!s.is_public());
    }

    #[test]
    fn test_blog_post_slug_falls_back_to_title() {
        let post = BlogPost::from_payload(
            CreateBlogPostRequest {
                title: "How To Apply".to_string(),
                slug: None,
                excerpt: None,
                content: "...".to_string(),
                category: "guides".to_string(),
                status: None,
            },
            None,
        );
        assert_eq!(post.slug, "how-to-apply");
    }

    #[test]
    fn test_user_serialization_excludes_hash() {
        let user = User::new(
            "jane@mtendere.com".to_string(),
            "jane".to_string(),
            "Jane".to_string(),
            "Banda".to_string(),
            "argon2id$fake-hash".to_string(),
            UserRole::User,
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("fake-hash"));
        assert!(!json.contains("passwordHash"));

        let json = serde_json::to_string(&user.profile()).unwrap();
        assert!(!json.contains("fake-hash"));
    }
}
