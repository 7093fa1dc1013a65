pub mod build_script;
pub mod capacity;
pub mod config;
pub mod decompose;
pub mod discover;
pub mod emit;
pub mod error;
pub mod generator;
pub mod layout;
pub mod scan;
pub mod source_location;
