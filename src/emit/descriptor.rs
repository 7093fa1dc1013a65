use super::rust::INTERFACE_NAME;
use crate::config::Settings;
use crate::layout::{Block, BlockSet};
use serde::{Deserialize, Serialize};

/// Layout of every generated block, for tools that build their own types
/// instead of compiling the Rust output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub interface: String,
    pub type_prefix: String,
    pub blocks: Vec<Block>,
}

impl LayoutDescriptor {
    pub fn new(blocks: &BlockSet, settings: &Settings) -> LayoutDescriptor {
        LayoutDescriptor {
            interface: INTERFACE_NAME.to_string(),
            type_prefix: settings.type_prefix.clone(),
            blocks: blocks.iter().cloned().collect(),
        }
    }
}

pub fn render_descriptor(blocks: &BlockSet, settings: &Settings) -> Result<String, ron::Error> {
    let descriptor = LayoutDescriptor::new(blocks, settings);
    let mut out = ron::ser::to_string_pretty(&descriptor, ron::ser::PrettyConfig::default())?;
    out.push('\n');
    Ok(out)
}
