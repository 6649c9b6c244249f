//! One-time backend selection.
//!
//! The first `resolve` tries the candidates in order and latches the
//! outcome. A latched failure is permanent: later calls report
//! `NoBackendAvailable` without trying again, and a selected backend is
//! never torn down.

use std::sync::{Arc, OnceLock};

use crate::backend::Backend;
use crate::error::{ProductInfoError, Result};

pub struct Resolver {
    candidates: Vec<Arc<dyn Backend>>,
    selected: OnceLock<Option<Arc<dyn Backend>>>,
}

impl Resolver {
    pub fn new(candidates: Vec<Arc<dyn Backend>>) -> Self {
        Self {
            candidates,
            selected: OnceLock::new(),
        }
    }

    /// Concurrent first callers block until the single selection finishes.
    pub fn resolve(&self) -> Result<Arc<dyn Backend>> {
        self.selected
            .get_or_init(|| select_first(&self.candidates))
            .clone()
            .ok_or(ProductInfoError::NoBackendAvailable)
    }

    /// Name of the selected backend, if resolution has already happened.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.get()?.as_deref().map(|backend| backend.name())
    }
}

pub fn select_first(candidates: &[Arc<dyn Backend>]) -> Option<Arc<dyn Backend>> {
    for backend in candidates {
        match backend.init() {
            Ok(()) => {
                tracing::debug!(backend = backend.name(), "selected product info source");
                return Some(Arc::clone(backend));
            }
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::debug!(backend = backend.name(), error = %reason, "source unavailable");
            }
        }
    }

    tracing::error!("could not find product info source");
    None
}
