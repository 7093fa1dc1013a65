//! Generation from a `build.rs`.
//!
//! ```no_run
//! // build.rs
//! fn main() -> anyhow::Result<()> {
//!     arraygen::build_script::Builder::new()
//!         .source("src")
//!         .size(64)
//!         .generate()?;
//!     Ok(())
//! }
//! ```
//!
//! ```ignore
//! // src/lib.rs
//! mod inline_array {
//!     include!(concat!(env!("OUT_DIR"), "/inline_array.g.rs"));
//! }
//! mod arrays {
//!     include!(concat!(env!("OUT_DIR"), "/arrays.g.rs"));
//! }
//! ```

use crate::config::Settings;
use crate::discover::{discover, source_files};
use crate::emit::{build_artifacts, write_artifacts};
use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

#[derive(Default)]
pub struct Builder {
    sources: Vec<PathBuf>,
    sizes: Vec<i64>,
    settings: Settings,
    out_dir: Option<PathBuf>,
    emit_rerun_directives: bool,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            emit_rerun_directives: true,
            ..Builder::default()
        }
    }

    /// A file or directory to scan for block type names.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Builder {
        self.sources.push(path.into());
        self
    }

    /// Requests a capacity directly, without it appearing in any source.
    pub fn size(mut self, capacity: i64) -> Builder {
        self.sizes.push(capacity);
        self
    }

    pub fn settings(mut self, settings: Settings) -> Builder {
        self.settings = settings;
        self
    }

    /// Defaults to `OUT_DIR`.
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Builder {
        self.out_dir = Some(dir.into());
        self
    }

    /// Whether to print `cargo:rerun-if-changed` for every scanned file.
    pub fn emit_rerun_directives(mut self, enabled: bool) -> Builder {
        self.emit_rerun_directives = enabled;
        self
    }

    /// Returns the paths of the written files.
    pub fn generate(self) -> Result<Vec<PathBuf>> {
        let out_dir = match self.out_dir {
            Some(dir) => dir,
            None => env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("OUT_DIR is not set, call `out_dir` outside of build scripts"))?,
        };

        let files = source_files(&self.sources)?;

        if self.emit_rerun_directives {
            for path in self.sources.iter().chain(&files) {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }

        let mut requested = self.sizes;
        requested.extend(discover(&files, &self.settings.type_prefix)?);

        let artifacts = build_artifacts(&requested, &self.settings)?;
        let written = write_artifacts(&out_dir, &artifacts)?;

        info!(count = written.len(), out_dir = %out_dir.display(), "wrote generated arrays");

        Ok(written)
    }
}
