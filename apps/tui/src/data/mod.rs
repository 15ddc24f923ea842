// Data layer: dataset loading and the GitHub profile fetch.

pub mod loader;
pub mod profile;

pub use loader::{load_projects, parse_projects, DataError};
pub use profile::{fetch_github_profile, GithubProfile};
