//! Reader and canonical writer for the trellis screen markup format.
//!
//! The format is an XML document with a single `<lvgl version="1.0">`
//! wrapper; each descendant element names a widget kind (with or without
//! the `lv_` prefix) and carries `id`, `name`, and arbitrary typed
//! attributes. Nesting encodes widget containment.
//!
//! ```
//! use trellis_markup::{parse_document, serialize_document};
//!
//! let forest = parse_document(r#"<lvgl version="1.0"><label name="title" text="Hi"/></lvgl>"#);
//! assert_eq!(forest[0].kind, "lv_label");
//!
//! let text = serialize_document(&forest);
//! assert_eq!(parse_document(&text), forest);
//! ```

mod reader;
mod writer;

pub use reader::parse_document;
pub use writer::{serialize_document, FORMAT_VERSION, WRAPPER_TAG};
