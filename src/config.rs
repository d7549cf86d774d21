use std::fs;
use std::path::Path;

use crate::catalog;
use crate::cli::ConfigArgs;
use crate::error::{Error, Result};
use crate::models::FleetConfig;

pub fn load_config(path: &Path) -> Result<FleetConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}

// File config when given, built-in catalog otherwise; --seed wins over the file.
pub fn resolve(args: &ConfigArgs) -> Result<FleetConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => catalog::default_fleet(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}
