//! The C code emitter.
//!
//! Walks a widget forest depth-first in document order and produces the two
//! generated artifacts: a declaration file and a definition file. Emission
//! is total: unknown widget kinds degrade to a comment line (their subtree
//! is dropped, not hoisted), and absent geometry falls back to defaults.

use convert_case::{Case, Casing};
use serde_json::json;
use trellis_core::{Node, WidgetRegistry};

use crate::error::{CodegenError, Result};
use crate::rules::{geometry_statements, RuleSet};
use crate::templates::TemplateEngine;

const HEADER_TEMPLATE: &str = r#"#ifndef {{upper screen}}_H
#define {{upper screen}}_H

{{#if comments}}/*******************************************************************************
 * Declarations for the generated screen '{{screen}}'.
 ******************************************************************************/

{{/if}}#include "lvgl.h"

void {{screen}}_create(lv_obj_t * parent);

#endif /* {{upper screen}}_H */
"#;

const SOURCE_TEMPLATE: &str = r#"#include "{{screen}}.h"

{{#if comments}}/*******************************************************************************
 * Builds the generated screen '{{screen}}' under the given parent.
 ******************************************************************************/
{{/if}}void {{screen}}_create(lv_obj_t * parent)
{
{{{body}}}
}
"#;

/// Options for one generation call.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Screen/document name; normalized to snake_case for identifiers and
    /// file names.
    pub screen_name: String,
    /// Include explanatory comments in the artifacts.
    pub comments: bool,
}

impl CodegenOptions {
    pub fn new(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            comments: false,
        }
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

/// The generated artifact pair for one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedScreen {
    /// Declaration file (`<screen>.h`).
    pub header: GeneratedFile,
    /// Definition file (`<screen>.c`).
    pub source: GeneratedFile,
}

/// Allocator for generated variable names.
///
/// Created at the top of every generation call and threaded through the
/// traversal, so repeated generations of the same forest are deterministic
/// and concurrent generations cannot interfere.
struct NameAllocator {
    counter: u32,
}

impl NameAllocator {
    fn new() -> Self {
        Self { counter: 0 }
    }

    fn alloc(&mut self, stripped_kind: &str) -> String {
        self.counter += 1;
        format!("{}_{}", stripped_kind, self.counter)
    }
}

/// C code generator for the LVGL widget API.
pub struct CGenerator<'a> {
    registry: WidgetRegistry,
    rules: RuleSet,
    engine: TemplateEngine<'a>,
}

impl<'a> CGenerator<'a> {
    /// Create a generator over the given widget catalog.
    pub fn new(registry: WidgetRegistry) -> Self {
        let mut engine = TemplateEngine::new();
        // The templates are compile-time constants; registration cannot fail
        // for them, and a failure here would be a defect in this crate.
        let _ = engine.register_template("c_header", HEADER_TEMPLATE);
        let _ = engine.register_template("c_source", SOURCE_TEMPLATE);
        Self {
            registry,
            rules: RuleSet::new(),
            engine,
        }
    }

    /// Generate the declaration/definition pair for a forest.
    pub fn generate(&self, forest: &[Node], options: &CodegenOptions) -> Result<GeneratedScreen> {
        let screen = options.screen_name.to_case(Case::Snake);
        if screen.is_empty() {
            return Err(CodegenError::InvalidScreenName(options.screen_name.clone()));
        }

        let mut alloc = NameAllocator::new();
        let mut lines = Vec::new();
        for (i, node) in forest.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            self.emit_node(node, "parent", &mut alloc, options, &mut lines);
        }
        let body = lines.join("\n");

        let data = json!({
            "screen": screen,
            "comments": options.comments,
            "body": body,
        });

        Ok(GeneratedScreen {
            header: GeneratedFile {
                path: format!("{}.h", screen),
                content: self.engine.render("c_header", &data)?,
            },
            source: GeneratedFile {
                path: format!("{}.c", screen),
                content: self.engine.render("c_source", &data)?,
            },
        })
    }

    /// Emit one node and its subtree.
    fn emit_node(
        &self,
        node: &Node,
        parent_var: &str,
        alloc: &mut NameAllocator,
        options: &CodegenOptions,
        lines: &mut Vec<String>,
    ) {
        const INDENT: &str = "    ";

        let Some(spec) = self.registry.get(&node.kind) else {
            // Children of an unrenderable node are dropped, not hoisted.
            lines.push(format!("{}/* unknown widget type: {} */", INDENT, node.kind));
            return;
        };

        // A name equal to the stripped kind is the parser's default for an
        // unnamed node; those get allocator names instead.
        let var = if node.name == node.stripped_kind() {
            alloc.alloc(node.stripped_kind())
        } else {
            node.name.clone()
        };

        if options.comments {
            lines.push(format!("{}/* {}: {} */", INDENT, spec.display_name, var));
        }
        lines.push(format!(
            "{}lv_obj_t * {} = {}({});",
            INDENT, var, spec.constructor, parent_var
        ));
        for stmt in geometry_statements(node, &var) {
            lines.push(format!("{}{}", INDENT, stmt));
        }
        for (key, value) in &node.properties {
            if let Some(stmt) = self.rules.translate(&node.kind, key, value, &var).statement {
                lines.push(format!("{}{}", INDENT, stmt));
            }
        }

        for (i, child) in node.children.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            self.emit_node(child, &var, alloc, options, lines);
        }
    }
}
