pub mod home;
pub mod project;
pub mod project_category;
pub mod skill;
