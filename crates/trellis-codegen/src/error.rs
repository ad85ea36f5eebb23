//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// Emission itself is total over any forest: unknown kinds degrade to a
/// comment and missing properties to defaults. Errors arise only from the
/// surrounding machinery (screen naming, template rendering).
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Screen name normalized to nothing usable.
    #[error("Invalid screen name: {0:?}")]
    InvalidScreenName(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
