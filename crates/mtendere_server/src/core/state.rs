use mtendere_auth::auth::AuthManager;
use mtendere_settings::config::MtendereConfig;
use mtendere_store::{MemoryCollection, MemoryStore};
use mtendere_types::entities::{
    Application, BlogPost, Job, ManagedEntity, Partner, Scholarship, TeamMember, Testimonial,
};
use std::sync::Arc;

pub struct AppState {
    pub config: Arc<MtendereConfig>,
    pub auth_manager: AuthManager,
    pub store: MemoryStore,
}

/// Typed access to the collection backing a managed-entity kind. The
/// generic resource routes are written against this, so registering a new
/// kind is one impl plus a router line.
pub trait HasCollection<T: ManagedEntity> {
    fn collection(&self) -> &MemoryCollection<T>;
}

impl HasCollection<Scholarship> for AppState {
    fn collection(&self) -> &MemoryCollection<Scholarship> {
        &self.store.scholarships
    }
}

impl HasCollection<Job> for AppState {
    fn collection(&self) -> &MemoryCollection<Job> {
        &self.store.jobs
    }
}

impl HasCollection<Application> for AppState {
    fn collection(&self) -> &MemoryCollection<Application> {
        &self.store.applications
    }
}

impl HasCollection<Partner> for AppState {
    fn collection(&self) -> &MemoryCollection<Partner> {
        &self.store.partners
    }
}

impl HasCollection<Testimonial> for AppState {
    fn collection(&self) -> &MemoryCollection<Testimonial> {
        &self.store.testimonials
    }
}

impl HasCollection<BlogPost> for AppState {
    fn collection(&self) -> &MemoryCollection<BlogPost> {
        &self.store.blog_posts
    }
}

impl HasCollection<TeamMember> for AppState {
    fn collection(&self) -> &MemoryCollection<TeamMember> {
        &self.store.team_members
    }
}
