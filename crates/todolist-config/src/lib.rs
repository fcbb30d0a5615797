//! Configuration management for the todolist system.
//!
//! Loads and saves `todolist.yaml` and turns its `display` section into a
//! [`todolist_core::DisplayStyle`].

pub mod config;

pub use config::{
    CONFIG_FILE_NAME, ConfigError, DisplayConfig, Result, TodoListConfig, load_config,
    save_config,
};
