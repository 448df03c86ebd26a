//! Shadow configuration operations
//!
//! TOML loading and validation. Pure functions over `ShadowConfig`.

use super::config_data::ShadowConfig;
use crate::constants::slots::SLOT_MASK_BITS;
use crate::error::{io_error, ShadowError, ShadowResult};
use std::path::Path;

/// Parse and validate a config from TOML text
pub fn load_config_from_str(text: &str) -> ShadowResult<ShadowConfig> {
    let config: ShadowConfig = toml::from_str(text)?;
    validate_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a config file
pub fn load_config_from_file(path: &Path) -> ShadowResult<ShadowConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let config = load_config_from_str(&text)?;
    log::info!(
        "[load_config_from_file] Loaded shadow config from {} ({} slots, {} texels)",
        path.display(),
        config.max_emitter_slots,
        config.shadow_map_resolution
    );
    Ok(config)
}

/// Serialize a config to TOML text
pub fn config_to_toml(config: &ShadowConfig) -> ShadowResult<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Check every field against the limits of the allocator and targets
pub fn validate_config(config: &ShadowConfig) -> ShadowResult<()> {
    if config.max_emitter_slots == 0 || config.max_emitter_slots > SLOT_MASK_BITS {
        return Err(invalid(
            "max_emitter_slots",
            config.max_emitter_slots,
            format!("must be in 1..={}", SLOT_MASK_BITS),
        ));
    }

    if config.shadow_map_resolution == 0 {
        return Err(invalid(
            "shadow_map_resolution",
            config.shadow_map_resolution,
            "must be positive".to_string(),
        ));
    }

    if !config.initial_map_scale.is_finite() || config.initial_map_scale < 1.0 {
        return Err(invalid(
            "initial_map_scale",
            config.initial_map_scale,
            "must be a finite value >= 1.0".to_string(),
        ));
    }

    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: String) -> ShadowError {
    ShadowError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}
