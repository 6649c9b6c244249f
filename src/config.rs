use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::BackendKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selection order; the first backend whose init succeeds is used.
    #[serde(default = "default_backends")]
    pub backends: Vec<BackendKind>,
    #[serde(default)]
    pub sandbox: SandboxConfig,
    #[serde(default)]
    pub dbus: DbusConfig,
    #[serde(default)]
    pub partition: PartitionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    #[serde(default = "default_sandbox_marker")]
    pub marker: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbusConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    #[serde(default = "default_partition_root")]
    pub root: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = Self::project_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validate config at {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base
            .config_dir()
            .join("osso-product-info")
            .join("config.json"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backends.is_empty() {
            bail!("backends must list at least one source");
        }

        for (i, kind) in self.backends.iter().enumerate() {
            if self.backends[..i].contains(kind) {
                bail!("backend {kind} listed more than once");
            }
        }

        if self.dbus.timeout_seconds == 0 {
            bail!("dbus.timeout_seconds must be greater than 0");
        }

        Ok(())
    }

    fn project_path() -> Option<PathBuf> {
        Some(PathBuf::from("osso-product-info.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backends: default_backends(),
            sandbox: SandboxConfig::default(),
            dbus: DbusConfig::default(),
            partition: PartitionConfig::default(),
        }
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            marker: default_sandbox_marker(),
        }
    }
}

impl Default for DbusConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            root: default_partition_root(),
        }
    }
}

fn default_backends() -> Vec<BackendKind> {
    vec![BackendKind::Sandbox, BackendKind::Dbus, BackendKind::Partition]
}

fn default_sandbox_marker() -> PathBuf {
    PathBuf::from("/targets/links/scratchbox.config")
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_partition_root() -> PathBuf {
    PathBuf::from("/var/lib/osso-product-info/cal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.backends, default_backends());
        assert_eq!(config.dbus.timeout_seconds, 10);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_duplicate_backends() {
        let config: Config =
            serde_json::from_str(r#"{"backends":["partition","sandbox","partition"]}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_backends_and_zero_timeout() {
        let config: Config = serde_json::from_str(r#"{"backends":[]}"#).unwrap();
        assert!(config.validate().is_err());

        let config: Config = serde_json::from_str(r#"{"dbus":{"timeout_seconds":0}}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
