use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{project_category::ProjectCategory, skill::Skill};

/// A project row as it comes back from the recent-projects query. Relations
/// are loaded separately and attached by the home use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// A project with its many-to-many relations resolved, as serialized in the
/// homepage payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithRelations {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
    pub skills: Vec<Skill>,
    pub categories: Vec<ProjectCategory>,
}

impl ProjectWithRelations {
    pub fn new(project: Project, skills: Vec<Skill>, categories: Vec<ProjectCategory>) -> Self {
        ProjectWithRelations {
            id: project.id,
            title: project.title,
            slug: project.slug,
            image: project.image,
            status: project.status,
            published_at: project.published_at,
            skills,
            categories,
        }
    }
}
