use serde::{Deserialize, Serialize};

use crate::entities::{
    project::ProjectWithRelations, project_category::ProjectCategorySummary, skill::Skill,
};

/// The aggregated homepage payload. The `projectCategories` key is the wire
/// name every frontend consumer already depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub skills: Vec<Skill>,
    #[serde(rename = "projectCategories")]
    pub project_categories: Vec<ProjectCategorySummary>,
    pub projects: Vec<ProjectWithRelations>,
}
