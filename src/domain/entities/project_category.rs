use serde::{Deserialize, Serialize};

/// Category fields exposed on a project's relation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectCategory {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

/// A category row from the ranking query, carrying the number of published
/// projects it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectCategorySummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub projects_count: i64,
}
