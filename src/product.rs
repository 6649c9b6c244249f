use serde::{Serialize, Serializer};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::backend::{self, Backend, BlockFlags, PartitionWriter};
use crate::config::Config;
use crate::error::{ProductInfoError, Result};
use crate::info::{Derivation, InfoCode};
use crate::parse;
use crate::resolver::Resolver;
use crate::tables::{self, BLOCK_SW_RELEASE_VER};

/// Query and set entry point over one resolved backend.
pub struct ProductInfo {
    resolver: Resolver,
    partition_root: PathBuf,
}

#[derive(Debug)]
pub struct DumpEntry {
    pub code: InfoCode,
    pub value: Option<String>,
    pub error: Option<String>,
}

impl ProductInfo {
    pub fn new(config: &Config) -> Self {
        Self::with_backends(backend::candidates(config), config.partition.root.clone())
    }

    /// Writes always go to the partition store at `partition_root`,
    /// whichever backend answers queries.
    pub fn with_backends(candidates: Vec<Arc<dyn Backend>>, partition_root: PathBuf) -> Self {
        Self {
            resolver: Resolver::new(candidates),
            partition_root,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn query(&self, code: InfoCode) -> Result<String> {
        let result = self.resolve_value(code);
        if let Err(err) = &result {
            tracing::error!(code = %code, error = %err, "product info query failed");
        }
        result
    }

    fn resolve_value(&self, code: InfoCode) -> Result<String> {
        let backend = self.resolver.resolve()?;

        let result = match code.derivation() {
            Derivation::Direct => fetch(backend.as_ref(), code),
            Derivation::Release => fetch(backend.as_ref(), InfoCode::Version)
                .and_then(|raw| parse::release_field(code, &raw)),
            Derivation::Hardware => fetch(backend.as_ref(), InfoCode::Hardware)
                .and_then(|raw| parse::hardware_field(code, &raw)),
        };

        backend.fini();
        result
    }

    pub fn set(&self, code: InfoCode, value: &str) -> Result<()> {
        if code != InfoCode::Version {
            let err = ProductInfoError::UnsupportedSetCode(code);
            tracing::error!(code = %code, "{err}");
            return Err(err);
        }

        let result = self.write_release_version(value);
        match &result {
            Ok(()) => tracing::debug!(block = BLOCK_SW_RELEASE_VER, "release version written"),
            Err(err) => tracing::error!(code = %code, error = %err, "product info set failed"),
        }
        result
    }

    fn write_release_version(&self, value: &str) -> Result<()> {
        let write_failed = |source: io::Error| ProductInfoError::WriteFailed {
            block: BLOCK_SW_RELEASE_VER.to_string(),
            source,
        };

        if value.is_empty() {
            return Err(write_failed(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty value",
            )));
        }

        let writer = PartitionWriter::open(&self.partition_root).map_err(write_failed)?;
        let written = writer.write_block(BLOCK_SW_RELEASE_VER, value.as_bytes(), BlockFlags::USER);
        writer.close();
        written.map_err(write_failed)
    }

    /// Every code in order; failures are kept per entry.
    pub fn dump(&self) -> Vec<DumpEntry> {
        InfoCode::ALL
            .iter()
            .map(|&code| match self.query(code) {
                Ok(value) => DumpEntry {
                    code,
                    value: Some(value),
                    error: None,
                },
                Err(err) => DumpEntry {
                    code,
                    value: None,
                    error: Some(err.to_string()),
                },
            })
            .collect()
    }
}

/// Serializes dump entries as a `NAME: value | null` map in code order.
pub struct DumpMap<'a>(pub &'a [DumpEntry]);

impl Serialize for DumpMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|entry| (entry.code, &entry.value)))
    }
}

fn fetch(backend: &dyn Backend, code: InfoCode) -> Result<String> {
    let key = tables::raw_key_for(code).ok_or(ProductInfoError::KeyNotMapped(code))?;

    match backend.get(key) {
        Ok(Some(value)) if !value.is_empty() => Ok(value),
        Ok(_) => Err(ProductInfoError::EmptyValue {
            key: key.to_string(),
        }),
        Err(err) => Err(ProductInfoError::BackendFetchFailed {
            key: key.to_string(),
            message: format!("{err:#}"),
        }),
    }
}

static GLOBAL: OnceLock<ProductInfo> = OnceLock::new();

/// Process-wide instance, configured from `Config::load` on first use.
pub fn global() -> &'static ProductInfo {
    GLOBAL.get_or_init(|| {
        let config = Config::load().unwrap_or_else(|err| {
            let reason = format!("{err:#}");
            tracing::warn!(error = %reason, "config load failed; using defaults");
            Config::default()
        });
        ProductInfo::new(&config)
    })
}

pub fn query(code: InfoCode) -> Result<String> {
    global().query(code)
}

pub fn set(code: InfoCode, value: &str) -> Result<()> {
    global().set(code, value)
}
