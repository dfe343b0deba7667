//! Command implementations

pub mod export;
pub mod plan;
pub mod render;
pub mod validate;
pub mod version;
