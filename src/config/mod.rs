//! Configuration module for geoscan
//!
//! This module handles project-level configuration (`geoscan.toml`) and the
//! CLI defaults it can supply.

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, CliDefaults, ConfigError, ProjectConfig,
    CONFIG_FILE_NAME, EXAMPLE_CONFIG, JSON_CONFIG_FILE_NAME,
};
