//! Core types for the trellis UI translation engine.
//!
//! This crate provides the foundational types used across the other trellis
//! crates:
//! - The widget node model ([`Node`], [`PropValue`])
//! - Document ownership and id-addressed editing ([`Document`])
//! - The read-only widget catalog ([`WidgetRegistry`])
//! - Error types

pub mod document;
pub mod errors;
pub mod node;
pub mod registry;

pub use document::*;
pub use errors::*;
pub use node::*;
pub use registry::*;
