use async_trait::async_trait;
use sqlx::{self, PgPool};

use crate::{
    constants::PUBLISHED_STATUS,
    entities::{
        project::Project,
        project_category::{ProjectCategory, ProjectCategorySummary},
        skill::Skill,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxHomeRepo,
};

#[async_trait]
pub trait HomeRepository: Send + Sync {
    /// Every skill row, unfiltered.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    /// Active, non-deleted categories ranked by how many published projects
    /// they contain, best first.
    async fn top_categories(&self, limit: i64) -> Result<Vec<ProjectCategorySummary>, AppError>;

    /// Most recently published projects that belong to at least one of the
    /// given categories.
    async fn recent_published_projects(
        &self,
        category_ids: &[i32],
        limit: i64,
    ) -> Result<Vec<Project>, AppError>;

    /// Skill relation rows for a set of projects, keyed by project id.
    async fn skills_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<(i32, Skill)>, AppError>;

    /// Category relation rows for a set of projects, restricted to the given
    /// category ids.
    async fn categories_for_projects(
        &self,
        project_ids: &[i32],
        category_ids: &[i32],
    ) -> Result<Vec<(i32, ProjectCategory)>, AppError>;

    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxHomeRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxHomeRepo { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectSkillRow {
    project_id: i32,
    #[sqlx(flatten)]
    skill: Skill,
}

#[derive(sqlx::FromRow)]
struct ProjectCategoryRow {
    project_id: i32,
    #[sqlx(flatten)]
    category: ProjectCategory,
}

#[async_trait]
impl HomeRepository for SqlxHomeRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, name, slug, image
            FROM skills
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn top_categories(&self, limit: i64) -> Result<Vec<ProjectCategorySummary>, AppError> {
        // The LEFT JOIN keeps categories with zero published projects in the
        // ranking; the publish filter lives in the join condition so those
        // rows count as zero rather than disappearing.
        let categories = sqlx::query_as::<_, ProjectCategorySummary>(
            r#"
            SELECT pc.id, pc.name, pc.slug, pc.is_active,
                   COUNT(p.id) AS projects_count
            FROM project_categories pc
            LEFT JOIN project_project_categories ppc
                ON pc.id = ppc.project_category_id
            LEFT JOIN projects p
                ON p.id = ppc.project_id
                AND p.status = $1
                AND p.published_at IS NOT NULL
                AND p.published_at <= NOW()
                AND p.deleted_at IS NULL
            WHERE pc.is_active = TRUE AND pc.deleted_at IS NULL
            GROUP BY pc.id, pc.name, pc.slug, pc.is_active
            ORDER BY projects_count DESC, pc.id
            LIMIT $2
            "#,
        )
        .bind(PUBLISHED_STATUS)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn recent_published_projects(
        &self,
        category_ids: &[i32],
        limit: i64,
    ) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT p.id, p.title, p.slug, p.image, p.status, p.published_at
            FROM projects p
            WHERE p.status = $1
              AND p.published_at IS NOT NULL
              AND p.published_at <= NOW()
              AND p.deleted_at IS NULL
              AND EXISTS (
                  SELECT 1 FROM project_project_categories ppc
                  WHERE ppc.project_id = p.id
                    AND ppc.project_category_id = ANY($2)
              )
            ORDER BY p.published_at DESC
            LIMIT $3
            "#,
        )
        .bind(PUBLISHED_STATUS)
        .bind(category_ids)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn skills_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<(i32, Skill)>, AppError> {
        let rows = sqlx::query_as::<_, ProjectSkillRow>(
            r#"
            SELECT ps.project_id, s.id, s.name, s.slug, s.image
            FROM project_skills ps
            JOIN skills s ON s.id = ps.skill_id
            WHERE ps.project_id = ANY($1)
            ORDER BY ps.project_id, s.id
            "#,
        )
        .bind(project_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.project_id, r.skill)).collect())
    }

    async fn categories_for_projects(
        &self,
        project_ids: &[i32],
        category_ids: &[i32],
    ) -> Result<Vec<(i32, ProjectCategory)>, AppError> {
        let rows = sqlx::query_as::<_, ProjectCategoryRow>(
            r#"
            SELECT ppc.project_id, pc.id, pc.name, pc.slug, pc.is_active
            FROM project_project_categories ppc
            JOIN project_categories pc ON pc.id = ppc.project_category_id
            WHERE ppc.project_id = ANY($1)
              AND pc.id = ANY($2)
              AND pc.deleted_at IS NULL
            ORDER BY ppc.project_id, pc.id
            "#,
        )
        .bind(project_ids)
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.project_id, r.category))
            .collect())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
