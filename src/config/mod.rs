/// Config Module - Data-Oriented Programming (DOP) style
///
/// - config_data.rs: ShadowConfig, pure data with serde support
/// - config_operations.rs: TOML loading and validation

pub mod config_data;
pub mod config_operations;

pub use config_data::ShadowConfig;
pub use config_operations::{
    config_to_toml, load_config_from_file, load_config_from_str, validate_config,
};
