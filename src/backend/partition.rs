//! Configuration partition store.
//!
//! Blocks are kept one file per block name under a root directory. A raw
//! key such as `/device/sw-release-ver` reads the block named by its last
//! path segment. User-writable blocks are world readable (0644), the rest
//! are owner only (0600).

use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::Backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockFlags {
    pub user: bool,
}

impl BlockFlags {
    pub const USER: BlockFlags = BlockFlags { user: true };

    fn mode(self) -> u32 {
        if self.user {
            0o644
        } else {
            0o600
        }
    }
}

pub fn block_for_key(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

fn open_root(root: &Path) -> io::Result<()> {
    if !fs::metadata(root)?.is_dir() {
        return Err(io::Error::other(format!(
            "partition store {} is not a directory",
            root.display()
        )));
    }
    Ok(())
}

pub struct PartitionBackend {
    root: PathBuf,
}

impl PartitionBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Backend for PartitionBackend {
    fn name(&self) -> &str {
        "partition"
    }

    fn init(&self) -> anyhow::Result<()> {
        open_root(&self.root)
            .with_context(|| format!("open partition store {}", self.root.display()))
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let block = block_for_key(key);
        if block.is_empty() {
            return Ok(None);
        }

        let path = self.root.join(block);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("read block {}", path.display()))
            }
        };

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    // The store handle is kept for the life of the process.
}

/// Write handle on the partition store.
pub struct PartitionWriter {
    root: PathBuf,
}

impl PartitionWriter {
    pub fn open(root: &Path) -> io::Result<Self> {
        open_root(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Replaces the whole block. Readers see either the old or the new
    /// contents, never a partial write.
    pub fn write_block(&self, name: &str, data: &[u8], flags: BlockFlags) -> io::Result<()> {
        if name.is_empty() || name.contains('/') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid block name {name:?}"),
            ));
        }

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(flags.mode()))?;
        tmp.persist(self.root.join(name)).map_err(|err| err.error)?;
        Ok(())
    }

    pub fn close(self) {
        tracing::debug!(root = %self.root.display(), "partition store closed");
    }
}
