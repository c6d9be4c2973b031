use crate::error::{DevMeterError, Result};
use crate::types::config::DevMeterConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "devmeter.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".devmeter/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/devmeter/config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Global,
    Project,
    Local,
}

pub fn load_config(root: &Path) -> Result<Option<DevMeterConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<DevMeterConfig>> {
    let project = root.join(DEFAULT_CONFIG_FILE);
    if !project.exists() {
        return Ok(None);
    }

    let layers = [
        (Layer::Global, global_path.map(Path::to_path_buf)),
        (Layer::Project, Some(project)),
        (Layer::Local, Some(root.join(DEFAULT_LOCAL_FILE))),
    ];
    let mut merged = Value::Table(Map::new());
    for (layer, path) in layers {
        let Some(path) = path.filter(|path| path.exists()) else {
            continue;
        };
        debug!(?layer, path = %path.display(), "applying config layer");
        overlay(&mut merged, read_layer(&path)?);
    }

    let cfg: DevMeterConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| DevMeterError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DevMeterError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value in `top` replaces the one below.
fn overlay(base: &mut Value, top: Value) {
    match (base, top) {
        (Value::Table(below), Value::Table(above)) => {
            for (key, value) in above {
                if let Some(existing) = below.get_mut(&key) {
                    overlay(existing, value);
                } else {
                    below.insert(key, value);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
