use std::collections::HashMap;

use crate::{
    constants::{MAX_CATEGORIES, MAX_PROJECTS_ALL_VIEW},
    entities::{home::HomeResponse, project::ProjectWithRelations},
    errors::AppError,
    repositories::home::HomeRepository,
};

pub struct HomeHandler<R>
where
    R: HomeRepository,
{
    pub home_repo: R,
}

impl<R> HomeHandler<R>
where
    R: HomeRepository,
{
    pub fn new(home_repo: R) -> Self {
        HomeHandler { home_repo }
    }

    /// Builds the homepage payload: every skill, the active categories ranked
    /// by published-project count, and the most recent published projects
    /// belonging to those categories, with relations attached.
    pub async fn get_home_data(&self) -> Result<HomeResponse, AppError> {
        let skills = self.home_repo.list_skills().await?;

        let project_categories = self.home_repo.top_categories(MAX_CATEGORIES).await?;
        let top_category_ids: Vec<i32> = project_categories.iter().map(|c| c.id).collect();

        // No eligible categories means nothing to hang projects on.
        let projects = if top_category_ids.is_empty() {
            Vec::new()
        } else {
            let rows = self
                .home_repo
                .recent_published_projects(&top_category_ids, MAX_PROJECTS_ALL_VIEW)
                .await?;

            let project_ids: Vec<i32> = rows.iter().map(|p| p.id).collect();

            let mut skills_by_project = group_relations(
                self.home_repo.skills_for_projects(&project_ids).await?,
            );
            let mut categories_by_project = group_relations(
                self.home_repo
                    .categories_for_projects(&project_ids, &top_category_ids)
                    .await?,
            );

            rows.into_iter()
                .map(|project| {
                    let skills = skills_by_project.remove(&project.id).unwrap_or_default();
                    let categories = categories_by_project
                        .remove(&project.id)
                        .unwrap_or_default();
                    ProjectWithRelations::new(project, skills, categories)
                })
                .collect()
        };

        Ok(HomeResponse {
            skills,
            project_categories,
            projects,
        })
    }

    /// Probe used by the health endpoint.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.home_repo.check_connection().await
    }
}

fn group_relations<T>(rows: Vec<(i32, T)>) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();
    for (project_id, item) in rows {
        grouped.entry(project_id).or_default().push(item);
    }
    grouped
}
