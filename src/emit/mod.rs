mod code_writer;
pub mod descriptor;
pub mod rust;

use crate::capacity::CapacityRegistry;
use crate::config::{OutputFormat, Settings};
use crate::generator::generate;
use crate::layout::BlockSet;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const GENERATED_HEADER: &str = "// @generated by arraygen. Do not edit.";

/// One generated file, named relative to the output directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: String,
}

/// Renders the interface, then the blocks in the configured format.
pub fn render(blocks: &BlockSet, settings: &Settings) -> Result<Vec<Artifact>> {
    let interface = Artifact {
        name: settings.interface_file.clone(),
        contents: rust::render_interface(),
    };

    let arrays = match settings.format {
        OutputFormat::Rust => Artifact {
            name: settings.arrays_file.clone(),
            contents: rust::render_arrays(blocks, settings),
        },
        OutputFormat::Ron => Artifact {
            name: settings.descriptor_file.clone(),
            contents: descriptor::render_descriptor(blocks, settings)?,
        },
    };

    Ok(vec![interface, arrays])
}

/// Runs a whole generation pass for the requested capacities and renders it.
pub fn build_artifacts(requested: &[i64], settings: &Settings) -> Result<Vec<Artifact>> {
    let mut registry = CapacityRegistry::new();
    registry.extend(requested.iter().copied())?;

    let blocks = generate(&registry)?;

    render(&blocks, settings)
}

pub fn write_artifacts(out_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = out_dir.join(&artifact.name);
        fs::write(&path, &artifact.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
