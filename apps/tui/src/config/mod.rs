pub mod config;

pub use config::{
    init_app_config, load_theme_preference, save_theme_preference, AppConfig,
};
