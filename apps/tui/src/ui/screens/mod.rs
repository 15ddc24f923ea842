pub mod home;
pub mod page;
pub mod projects;
