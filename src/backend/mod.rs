pub mod call;
pub mod dbus;
pub mod partition;
pub mod sandbox;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::config::Config;

pub use dbus::DbusBackend;
pub use partition::{BlockFlags, PartitionBackend, PartitionWriter};
pub use sandbox::SandboxBackend;

/// A source of raw product info values.
///
/// `init` is the availability check and runs at most once per resolver.
/// `fini` runs after every query and may drop per-call resources; `get`
/// must be usable again afterwards.
pub trait Backend: Send + Sync {
    fn name(&self) -> &str;
    fn init(&self) -> anyhow::Result<()>;
    /// `Ok(None)` when the key has no value in this source.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn fini(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Sandbox,
    #[value(alias = "remote")]
    Dbus,
    #[value(alias = "cal")]
    Partition,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Sandbox => "sandbox",
            BackendKind::Dbus => "dbus",
            BackendKind::Partition => "partition",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn build_backend(kind: BackendKind, config: &Config) -> Arc<dyn Backend> {
    match kind {
        BackendKind::Sandbox => Arc::new(SandboxBackend::new(config.sandbox.marker.clone())),
        BackendKind::Dbus => Arc::new(DbusBackend::new(config.dbus.timeout_seconds)),
        BackendKind::Partition => Arc::new(PartitionBackend::new(config.partition.root.clone())),
    }
}

/// Candidates in configured selection order. Construction does no I/O.
pub fn candidates(config: &Config) -> Vec<Arc<dyn Backend>> {
    config
        .backends
        .iter()
        .map(|kind| build_backend(*kind, config))
        .collect()
}
