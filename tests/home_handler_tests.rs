use chrono::{Duration, Utc};
use mockall::mock;

use portfolio_home_api::{
    constants::{MAX_CATEGORIES, MAX_PROJECTS_ALL_VIEW},
    entities::{
        home::HomeResponse,
        project::{Project, ProjectWithRelations},
        project_category::{ProjectCategory, ProjectCategorySummary},
        skill::Skill,
    },
    errors::AppError,
    repositories::home::HomeRepository,
    use_cases::home::HomeHandler,
};

// === Mock Trait for HomeRepository ===
mock! {
    pub HomeRepo {}

    #[async_trait::async_trait]
    impl HomeRepository for HomeRepo {
        async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
        async fn top_categories(&self, limit: i64) -> Result<Vec<ProjectCategorySummary>, AppError>;
        async fn recent_published_projects(
            &self,
            category_ids: &[i32],
            limit: i64,
        ) -> Result<Vec<Project>, AppError>;
        async fn skills_for_projects(
            &self,
            project_ids: &[i32],
        ) -> Result<Vec<(i32, Skill)>, AppError>;
        async fn categories_for_projects(
            &self,
            project_ids: &[i32],
            category_ids: &[i32],
        ) -> Result<Vec<(i32, ProjectCategory)>, AppError>;
        async fn check_connection(&self) -> Result<(), AppError>;
    }
}

// === Fixture Helpers ===

fn skill(id: i32, name: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        image: Some(format!("/images/skills/{id}.png")),
    }
}

fn category(id: i32, name: &str) -> ProjectCategory {
    ProjectCategory {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        is_active: true,
    }
}

fn category_summary(id: i32, name: &str, projects_count: i64) -> ProjectCategorySummary {
    ProjectCategorySummary {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        is_active: true,
        projects_count,
    }
}

fn project(id: i32, title: &str, days_ago: i64) -> Project {
    Project {
        id,
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        image: None,
        status: "published".to_string(),
        published_at: Some(Utc::now() - Duration::days(days_ago)),
    }
}

// === TESTS ===

#[tokio::test]
async fn home_payload_assembles_relations() {
    let mut repo = MockHomeRepo::new();

    repo.expect_list_skills()
        .returning(|| Ok(vec![skill(1, "Rust"), skill(2, "Postgres")]));

    repo.expect_top_categories()
        .withf(|limit| *limit == MAX_CATEGORIES)
        .returning(|_| {
            Ok(vec![
                category_summary(10, "Backend", 4),
                category_summary(11, "Tooling", 1),
            ])
        });

    repo.expect_recent_published_projects()
        .withf(|category_ids, limit| {
            category_ids == [10, 11] && *limit == MAX_PROJECTS_ALL_VIEW
        })
        .returning(|_, _| Ok(vec![project(100, "Query Engine", 1), project(101, "CLI", 3)]));

    repo.expect_skills_for_projects()
        .withf(|project_ids| project_ids == [100, 101])
        .returning(|_| Ok(vec![(100, skill(1, "Rust")), (100, skill(2, "Postgres"))]));

    repo.expect_categories_for_projects()
        .withf(|project_ids, category_ids| project_ids == [100, 101] && category_ids == [10, 11])
        .returning(|_, _| Ok(vec![(100, category(10, "Backend")), (101, category(11, "Tooling"))]));

    let handler = HomeHandler::new(repo);
    let response = handler.get_home_data().await.unwrap();

    assert_eq!(response.skills.len(), 2);

    // Ranking order from the repository is preserved
    let ids: Vec<i32> = response.project_categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_eq!(response.project_categories[0].projects_count, 4);

    assert_eq!(response.projects.len(), 2);
    let first = &response.projects[0];
    assert_eq!(first.id, 100);
    assert_eq!(first.skills.len(), 2);
    assert_eq!(first.categories.len(), 1);
    assert_eq!(first.categories[0].id, 10);

    // Second project has a category but no skill rows
    let second = &response.projects[1];
    assert!(second.skills.is_empty());
    assert_eq!(second.categories[0].id, 11);
}

#[tokio::test]
async fn no_eligible_categories_short_circuits_projects() {
    let mut repo = MockHomeRepo::new();

    repo.expect_list_skills()
        .returning(|| Ok(vec![skill(1, "Rust")]));

    repo.expect_top_categories().returning(|_| Ok(vec![]));

    repo.expect_recent_published_projects().never();
    repo.expect_skills_for_projects().never();
    repo.expect_categories_for_projects().never();

    let handler = HomeHandler::new(repo);
    let response = handler.get_home_data().await.unwrap();

    assert_eq!(response.skills.len(), 1);
    assert!(response.project_categories.is_empty());
    assert!(response.projects.is_empty());
}

#[tokio::test]
async fn repository_error_propagates() {
    let mut repo = MockHomeRepo::new();

    repo.expect_list_skills()
        .returning(|| Err(AppError::InternalError("Database error: timeout".into())));

    let handler = HomeHandler::new(repo);
    let result = handler.get_home_data().await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[tokio::test]
async fn project_with_no_relations_gets_empty_lists() {
    let mut repo = MockHomeRepo::new();

    repo.expect_list_skills().returning(|| Ok(vec![]));

    repo.expect_top_categories()
        .returning(|_| Ok(vec![category_summary(10, "Backend", 0)]));

    repo.expect_recent_published_projects()
        .returning(|_, _| Ok(vec![project(100, "Orphan", 2)]));

    repo.expect_skills_for_projects().returning(|_| Ok(vec![]));
    repo.expect_categories_for_projects().returning(|_, _| Ok(vec![]));

    let handler = HomeHandler::new(repo);
    let response = handler.get_home_data().await.unwrap();

    assert_eq!(response.projects.len(), 1);
    assert!(response.projects[0].skills.is_empty());
    assert!(response.projects[0].categories.is_empty());
}

#[tokio::test]
async fn check_database_delegates_to_repository() {
    let mut repo = MockHomeRepo::new();
    repo.expect_check_connection().returning(|| Ok(()));

    let handler = HomeHandler::new(repo);
    assert!(handler.check_database().await.is_ok());
}

// === Wire Format ===

#[test]
fn response_serializes_with_expected_keys() {
    let response = HomeResponse {
        skills: vec![skill(1, "Rust")],
        project_categories: vec![category_summary(10, "Backend", 3)],
        projects: vec![ProjectWithRelations::new(
            project(100, "Query Engine", 1),
            vec![skill(1, "Rust")],
            vec![category(10, "Backend")],
        )],
    };

    let value = serde_json::to_value(&response).unwrap();

    assert!(value.get("skills").is_some());
    assert!(value.get("projectCategories").is_some());
    assert!(value.get("projects").is_some());

    let cat = &value["projectCategories"][0];
    assert_eq!(cat["projects_count"], 3);
    assert_eq!(cat["is_active"], true);

    let proj = &value["projects"][0];
    assert_eq!(proj["title"], "Query Engine");
    assert!(proj.get("published_at").is_some());
    assert_eq!(proj["skills"][0]["name"], "Rust");
    assert_eq!(proj["categories"][0]["slug"], "backend");
}
