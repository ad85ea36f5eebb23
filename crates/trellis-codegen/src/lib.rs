//! C code generation from trellis widget trees.
//!
//! This crate walks a widget forest in document order and produces the two
//! source artifacts that rebuild the same screen with the LVGL widget API:
//! an include-guarded declaration file and a definition file implementing
//! `<screen>_create(parent)`.
//!
//! # Example
//!
//! ```
//! use trellis_codegen::{CGenerator, CodegenOptions};
//! use trellis_core::{Node, WidgetRegistry};
//!
//! let generator = CGenerator::new(WidgetRegistry::builtin());
//! let forest = vec![Node::new("label").with_name("title").with_property("text", "Hi")];
//!
//! let screen = generator.generate(&forest, &CodegenOptions::new("main")).unwrap();
//! assert!(screen.source.content.contains(r#"lv_label_set_text(title, "Hi");"#));
//! ```

pub mod emitter;
pub mod error;
pub mod rules;
pub mod templates;

pub use emitter::{CGenerator, CodegenOptions, GeneratedFile, GeneratedScreen};
pub use error::{CodegenError, Result};
pub use rules::{geometry_statements, EmitClass, Emitted, RuleSet};
pub use templates::TemplateEngine;
