// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod nav;
pub mod theme;
pub mod view;

pub use domain::{Project, YearCount};
