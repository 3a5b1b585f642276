//! # Resource Locator
//!
//! Resolves template image files against an application resource root.
//!
//! The root differs between a packaged binary (images next to the
//! executable) and a source checkout (images in the project directory), with
//! an environment override for both:
//!
//! 1. `CHEQUIER_RESOURCES`, when set
//! 2. the directory containing the running executable
//! 3. the crate manifest directory (source checkout)

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the resource root.
pub const RESOURCES_ENV: &str = "CHEQUIER_RESOURCES";

/// Resolves resource file names to absolute paths.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    base: PathBuf,
}

impl ResourceLocator {
    /// Locate the resource root for this process.
    pub fn discover() -> ResourceLocator {
        if let Ok(dir) = env::var(RESOURCES_ENV) {
            return ResourceLocator { base: PathBuf::from(dir) };
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                // Packaged layout: images shipped next to the binary
                if dir.join("bdr_1.jpg").exists() {
                    return ResourceLocator { base: dir.to_path_buf() };
                }
            }
        }
        ResourceLocator {
            base: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        }
    }

    /// Build a locator rooted at an explicit directory (used by tests).
    pub fn rooted_at(base: impl Into<PathBuf>) -> ResourceLocator {
        ResourceLocator { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute path for a resource file name. Existence is not checked here;
    /// callers decide how to fall back.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.base.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_base_and_file() {
        let locator = ResourceLocator::rooted_at("/tmp/res");
        assert_eq!(locator.resolve("bna_1.jpg"), PathBuf::from("/tmp/res/bna_1.jpg"));
    }

    #[test]
    fn discover_returns_some_base() {
        let locator = ResourceLocator::discover();
        assert!(!locator.base().as_os_str().is_empty());
    }
}
