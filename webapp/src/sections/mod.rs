pub mod experience;
pub mod hero;
pub mod organizations;
pub mod projects;
pub mod skills;
