//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This enables hot-reloading of `portico.toml` while resolvers keep
//! reading a consistent snapshot.

use crate::config::PortalConfig;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<PortalConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(PortalConfig::default()));

/// Global hash of the current config file content.
static CONFIG_HASH: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<PortalConfig> {
    CONFIG.load_full()
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    use std::fs;

    let current = cfg();

    let content = fs::read_to_string(&current.config_path)?;
    let new_hash = crate::utils::hash::compute(content.as_bytes());

    let old_hash = CONFIG_HASH.load(std::sync::atomic::Ordering::Relaxed);
    if new_hash == old_hash {
        return Ok(false);
    }

    let new_config = PortalConfig::load(&current.config_path)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, std::sync::atomic::Ordering::Relaxed);

    Ok(true)
}

#[inline]
pub fn init_config(config: PortalConfig) -> Arc<PortalConfig> {
    use std::fs;

    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        let hash = crate::utils::hash::compute(content.as_bytes());
        CONFIG_HASH.store(hash, std::sync::atomic::Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsBuilder;
    use std::fs;

    // Single test for the global handle: init/reload share process-wide
    // state, so the whole lifecycle is exercised in one place.
    #[test]
    fn test_init_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portico.toml");
        fs::write(&path, "[docs]\nbuilder = \"local\"").unwrap();

        let config = PortalConfig::load(&path).unwrap();
        init_config(config);
        assert_eq!(cfg().docs.builder, DocsBuilder::Local);

        // Content unchanged: no reload
        assert!(!reload_config().unwrap());

        // Content changed: reload picks up the new builder
        fs::write(&path, "[docs]\nbuilder = \"external\"").unwrap();
        assert!(reload_config().unwrap());
        assert_eq!(cfg().docs.builder, DocsBuilder::External);
    }
}
