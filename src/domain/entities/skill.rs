use serde::{Deserialize, Serialize};

/// A skill record as stored upstream. The homepage returns every row of the
/// `skills` table unfiltered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
}
