//! Template engine for the generated file frames.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        Self::register_helpers(&mut handlebars);
        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // Upper case helper
        handlebars.register_helper(
            "upper",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
                    out.write(&param.to_uppercase())?;
                    Ok(())
                },
            ),
        );

        // Snake case helper
        handlebars.register_helper(
            "snake_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
                    out.write(&to_snake_case(param))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert to snake_case.
fn to_snake_case(s: &str) -> String {
    use convert_case::{Case, Casing};
    s.to_case(Case::Snake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_simple_template() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("proto", "void {{name}}_create(lv_obj_t * parent);")
            .unwrap();

        let result = engine.render("proto", &json!({"name": "main"})).unwrap();
        assert_eq!(result, "void main_create(lv_obj_t * parent);");
    }

    #[test]
    fn upper_helper_builds_include_guards() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("guard", "#ifndef {{upper name}}_H")
            .unwrap();

        let result = engine
            .render("guard", &json!({"name": "main_screen"}))
            .unwrap();
        assert_eq!(result, "#ifndef MAIN_SCREEN_H");
    }

    #[test]
    fn snake_case_helper() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("file", "{{snake_case name}}.c")
            .unwrap();

        let result = engine.render("file", &json!({"name": "Main Screen"})).unwrap();
        assert_eq!(result, "main_screen.c");
    }
}
