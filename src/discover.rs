use crate::scan::requested_capacities;
use anyhow::{anyhow, Context, Result};
use nohash_hasher::IntSet;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Files ending in this are our own output and never scanned.
pub const GENERATED_SUFFIX: &str = ".g.rs";

fn is_generated(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(GENERATED_SUFFIX))
}

/// Expands directories to the `.rs` files below them and drops generated
/// files. The result is sorted so that runs are reproducible.
pub fn source_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for input in inputs {
        if input.is_dir() {
            let dir = input
                .to_str()
                .ok_or_else(|| anyhow!("path {} is not valid UTF-8", input.display()))?;
            let pattern = format!("{}/**/*.rs", glob::Pattern::escape(dir));

            for entry in glob::glob(&pattern)? {
                let path = entry?;
                if is_generated(&path) {
                    debug!(path = %path.display(), "skipping generated file");
                    continue;
                }
                files.insert(path);
            }
        } else if is_generated(input) {
            warn!(path = %input.display(), "skipping generated file");
        } else {
            files.insert(input.clone());
        }
    }

    Ok(files.into_iter().collect())
}

/// Capacities named in every file, in file order, without duplicates.
pub fn discover(files: &[PathBuf], prefix: &str) -> Result<Vec<i64>> {
    let mut all = Vec::new();
    let mut seen = IntSet::default();

    for path in files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read source file {}", path.display()))?;

        debug!(path = %path.display(), "searching for {prefix}N types");

        for capacity in requested_capacities(&source, prefix) {
            info!(path = %path.display(), capacity, "found array size");

            if seen.insert(capacity) {
                all.push(capacity);
            }
        }
    }

    Ok(all)
}
