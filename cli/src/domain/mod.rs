//! Domain layer — pure validation rules and the types they report.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod container;
pub mod environment;
pub mod error;
pub mod id;
pub mod resources;
pub mod secret;
pub mod task;
pub mod volume;

pub use command::validate_command;
pub use config::{AdmitConfig, Limits, apply_config_value, validate_config_key, validate_config_value};
pub use container::validate_container;
pub use environment::{validate_environment, validate_variable};
pub use error::{ConfigError, ErrorKind, ValidationError};
pub use id::{
    validate_agent_id, validate_executor_id, validate_framework_id, validate_id,
    validate_id_within, validate_task_id,
};
pub use resources::validate_gpus;
pub use secret::validate_secret;
pub use task::validate_task;
pub use volume::{validate_volume, validate_volume_source};
