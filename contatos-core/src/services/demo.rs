//! Demo service - manage demo mode
//!
//! Demo mode swaps the HTTP backend for an in-memory repository seeded with
//! sample contacts, so the CLI can be tried without a running backend.
//! Changes made in demo mode last for a single command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;

/// Demo service for managing demo mode
pub struct DemoService {
    data_dir: PathBuf,
}

impl DemoService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.data_dir)
    }

    /// Disable demo mode
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.data_dir)
    }
}
