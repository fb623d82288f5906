use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::UserProfile;
use crate::enums::{ApplicationStatus, JobType, PublishStatus, UserRole};

pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl PageQuery {
    /// Resolve page/limit to usable values. Zero and absent both collapse
    /// to the defaults, so `page=0` cannot underflow the offset math.
    pub fn normalize(&self) -> (usize, usize) {
        let page = self.page.map(|p| p.max(1)).unwrap_or(1) as usize;
        let limit = self
            .limit
            .map(|l| l.max(1) as usize)
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        (page, limit)
    }
}

/// One page of a filtered listing. `total` counts every matching record,
/// not just the returned slice, for pagination controls.
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Login/registration response: the signed token plus a hash-free profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateScholarshipRequest {
    pub title: String,
    pub description: String,
    pub eligibility: String,
    pub amount: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub category: String,
    pub institution: String,
    pub status: Option<PublishStatus>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateScholarshipRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub amount: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub category: Option<String>,
    pub institution: Option<String>,
    pub status: Option<PublishStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_range: Option<String>,
    pub description: String,
    pub benefits: Option<String>,
    pub application_url: Option<String>,
    pub status: Option<PublishStatus>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_range: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    pub application_url: Option<String>,
    pub status: Option<PublishStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub scholarship_id: Option<Uuid>,
    pub applicant_name: String,
    pub applicant_email: String,
    pub motivation: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    pub status: Option<ApplicationStatus>,
    pub review_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartnerRequest {
    pub name: String,
    pub description: String,
    pub partnership_type: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartnerRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub partnership_type: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub author_name: String,
    pub author_title: Option<String>,
    pub quote: String,
    pub is_approved: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub quote: Option<String>,
    pub is_approved: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub status: Option<PublishStatus>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<PublishStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub position: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub users: usize,
    pub scholarships: usize,
    pub jobs: usize,
    pub applications: usize,
    pub partners: usize,
    pub testimonials: usize,
    pub blog_posts: usize,
    pub team_members: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_users: usize,
    pub total_applications: usize,
    pub total_scholarships: usize,
    pub total_jobs: usize,
    pub total_testimonials: usize,
    pub total_blog_posts: usize,
    pub total_team_members: usize,
    pub total_partners: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: u32,
    pub event: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
