//! Property translation rules.
//!
//! Maps a single `(widget kind, property name, value)` triple to at most one
//! C statement. Dispatch is an explicit registry: a fixed style-setter table
//! shared by every kind, plus a per-kind rule table for widget-specific
//! setters. Property names matched by neither are silently skipped.

use std::collections::HashMap;

use trellis_core::{format_number, Node, PropValue};

/// Which emission branch produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitClass {
    /// Geometry keys (`x`, `y`, `width`, `height`); the emitter owns these
    /// through [`geometry_statements`], so no statement is produced here.
    Geometry,
    /// Generic style setter from the shared table.
    Style,
    /// Widget-kind-specific setter.
    Widget,
    /// Unrecognized property for this kind; no statement, no error.
    Skipped,
}

/// Result of translating one property.
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    pub class: EmitClass,
    /// `None` when the branch produces nothing (skipped properties, or
    /// suppressed cases such as `checked="false"`).
    pub statement: Option<String>,
}

impl Emitted {
    fn none(class: EmitClass) -> Self {
        Self {
            class,
            statement: None,
        }
    }
}

/// A widget-specific emission rule: `(variable, value) -> statement | none`.
pub type EmitRule = Box<dyn Fn(&str, &PropValue) -> Option<String> + Send + Sync>;

/// Shared style-property table: property name, setter suffix, color-typed.
/// Every entry renders as `lv_obj_set_style_<suffix>(var, <value>, 0);`.
const STYLE_SETTERS: &[(&str, &str, bool)] = &[
    ("bg_color", "bg_color", true),
    ("bg_opa", "bg_opa", false),
    ("border_color", "border_color", true),
    ("border_width", "border_width", false),
    ("radius", "radius", false),
    ("text_color", "text_color", true),
    ("line_color", "line_color", true),
    ("line_width", "line_width", false),
    ("pad_left", "pad_left", false),
    ("pad_right", "pad_right", false),
    ("pad_top", "pad_top", false),
    ("pad_bottom", "pad_bottom", false),
    ("pad_row", "pad_row", false),
    ("pad_column", "pad_column", false),
];

/// The dispatch registry for a code-emission pass.
pub struct RuleSet {
    widget: HashMap<&'static str, HashMap<&'static str, EmitRule>>,
}

impl RuleSet {
    /// Build the stock rule table.
    pub fn new() -> Self {
        let mut widget: HashMap<&'static str, HashMap<&'static str, EmitRule>> = HashMap::new();

        let mut rule = |kind: &'static str, prop: &'static str, emit: EmitRule| {
            widget.entry(kind).or_default().insert(prop, emit);
        };

        rule(
            "lv_label",
            "text",
            Box::new(|var: &str, v: &PropValue| Some(format!("lv_label_set_text({}, {});", var, c_literal(v)))),
        );
        rule(
            "lv_label",
            "long_mode",
            Box::new(|var: &str, v: &PropValue| {
                let token = enum_token(v)?;
                Some(format!(
                    "lv_label_set_long_mode({}, LV_LABEL_LONG_{});",
                    var, token
                ))
            }),
        );

        rule(
            "lv_slider",
            "value",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_slider_set_value({}, {}, LV_ANIM_OFF);",
                    var,
                    format_number(n)
                ))
            }),
        );
        rule(
            "lv_bar",
            "value",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_bar_set_value({}, {}, LV_ANIM_OFF);",
                    var,
                    format_number(n)
                ))
            }),
        );
        rule(
            "lv_arc",
            "value",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!("lv_arc_set_value({}, {});", var, format_number(n)))
            }),
        );

        // Checked state only exists in the generated code when it is on.
        let checked: fn(&str, &PropValue) -> Option<String> = |var, v| {
            if v.as_bool()? {
                Some(format!("lv_obj_add_state({}, LV_STATE_CHECKED);", var))
            } else {
                None
            }
        };
        rule("lv_switch", "checked", Box::new(checked));
        rule("lv_checkbox", "checked", Box::new(checked));
        rule(
            "lv_checkbox",
            "text",
            Box::new(|var: &str, v: &PropValue| Some(format!("lv_checkbox_set_text({}, {});", var, c_literal(v)))),
        );

        rule(
            "lv_dropdown",
            "options",
            Box::new(|var: &str, v: &PropValue| {
                Some(format!("lv_dropdown_set_options({}, {});", var, c_literal(v)))
            }),
        );
        rule(
            "lv_dropdown",
            "selected",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_dropdown_set_selected({}, {});",
                    var,
                    format_number(n)
                ))
            }),
        );
        rule(
            "lv_roller",
            "options",
            Box::new(|var: &str, v: &PropValue| {
                Some(format!(
                    "lv_roller_set_options({}, {}, LV_ROLLER_MODE_NORMAL);",
                    var,
                    c_literal(v)
                ))
            }),
        );
        rule(
            "lv_roller",
            "selected",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_roller_set_selected({}, {}, LV_ANIM_OFF);",
                    var,
                    format_number(n)
                ))
            }),
        );

        rule(
            "lv_textarea",
            "text",
            Box::new(|var: &str, v: &PropValue| Some(format!("lv_textarea_set_text({}, {});", var, c_literal(v)))),
        );
        rule(
            "lv_textarea",
            "placeholder",
            Box::new(|var: &str, v: &PropValue| {
                Some(format!(
                    "lv_textarea_set_placeholder_text({}, {});",
                    var,
                    c_literal(v)
                ))
            }),
        );
        rule(
            "lv_textarea",
            "one_line",
            Box::new(|var: &str, v: &PropValue| {
                let b = v.as_bool()?;
                Some(format!("lv_textarea_set_one_line({}, {});", var, b))
            }),
        );
        rule(
            "lv_textarea",
            "password_mode",
            Box::new(|var: &str, v: &PropValue| {
                let b = v.as_bool()?;
                Some(format!("lv_textarea_set_password_mode({}, {});", var, b))
            }),
        );

        rule(
            "lv_image",
            "src",
            Box::new(|var: &str, v: &PropValue| Some(format!("lv_image_set_src({}, {});", var, c_literal(v)))),
        );
        rule(
            "lv_image",
            "zoom",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_image_set_scale({}, {});",
                    var,
                    format_number(n)
                ))
            }),
        );
        rule(
            "lv_image",
            "angle",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_image_set_rotation({}, {});",
                    var,
                    format_number(n)
                ))
            }),
        );

        rule(
            "lv_led",
            "color",
            Box::new(|var: &str, v: &PropValue| Some(format!("lv_led_set_color({}, {});", var, color_literal(v)))),
        );
        rule(
            "lv_led",
            "brightness",
            Box::new(|var: &str, v: &PropValue| {
                let n = v.as_num()?;
                Some(format!(
                    "lv_led_set_brightness({}, {});",
                    var,
                    format_number(n)
                ))
            }),
        );

        rule(
            "lv_obj",
            "layout",
            Box::new(|var: &str, v: &PropValue| {
                let token = enum_token(v)?;
                Some(format!("lv_obj_set_layout({}, LV_LAYOUT_{});", var, token))
            }),
        );
        rule(
            "lv_obj",
            "flex_flow",
            Box::new(|var: &str, v: &PropValue| {
                let token = enum_token(v)?;
                Some(format!(
                    "lv_obj_set_flex_flow({}, LV_FLEX_FLOW_{});",
                    var, token
                ))
            }),
        );

        Self { widget }
    }

    /// Translate one `(kind, property, value)` triple for variable `var`.
    ///
    /// Priority: geometry keys (owned by the emitter), then the shared style
    /// table, then the per-kind rule table, then skip.
    pub fn translate(&self, kind: &str, prop: &str, value: &PropValue, var: &str) -> Emitted {
        if matches!(prop, "x" | "y" | "width" | "height") {
            return Emitted::none(EmitClass::Geometry);
        }

        if let Some((_, suffix, is_color)) = STYLE_SETTERS.iter().find(|(name, ..)| *name == prop)
        {
            let rendered = if *is_color {
                color_literal(value)
            } else {
                c_literal(value)
            };
            return Emitted {
                class: EmitClass::Style,
                statement: Some(format!(
                    "lv_obj_set_style_{}({}, {}, 0);",
                    suffix, var, rendered
                )),
            };
        }

        if let Some(rule) = self.widget.get(kind).and_then(|rules| rules.get(prop)) {
            return Emitted {
                class: EmitClass::Widget,
                statement: rule(var, value),
            };
        }

        Emitted::none(EmitClass::Skipped)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The two fixed geometry statements for a node, with `0,0` position and
/// `100,50` size substituted for absent properties.
pub fn geometry_statements(node: &Node, var: &str) -> [String; 2] {
    let num = |key: &str, default: f64| {
        node.get_property(key)
            .and_then(PropValue::as_num)
            .unwrap_or(default)
    };
    let x = num("x", 0.0);
    let y = num("y", 0.0);
    let width = num("width", 100.0);
    let height = num("height", 50.0);
    [
        format!(
            "lv_obj_set_pos({}, {}, {});",
            var,
            format_number(x),
            format_number(y)
        ),
        format!(
            "lv_obj_set_size({}, {}, {});",
            var,
            format_number(width),
            format_number(height)
        ),
    ]
}

/// Render a property value as a C literal.
pub fn c_literal(value: &PropValue) -> String {
    match value {
        PropValue::Str(s) => c_quote(s),
        PropValue::Num(n) => format_number(*n),
        PropValue::Bool(b) => b.to_string(),
    }
}

/// Render a color-typed value as a color-construction call. A `#RRGGBB`
/// string becomes `lv_color_hex(0xRRGGBB)`; a numeric value is embedded as
/// a hex literal.
fn color_literal(value: &PropValue) -> String {
    match value {
        PropValue::Str(s) => format!("lv_color_hex(0x{})", s.trim_start_matches('#')),
        PropValue::Num(n) => format!("lv_color_hex(0x{:06x})", *n as u32),
        PropValue::Bool(b) => format!("lv_color_hex({})", b),
    }
}

/// Quote a string for C, escaping backslashes, quotes, and newlines.
fn c_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Uppercase an enumerated string value into its token spelling.
fn enum_token(value: &PropValue) -> Option<String> {
    value.as_str().map(|s| s.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_keys_are_classified_but_not_emitted() {
        let rules = RuleSet::new();
        for key in ["x", "y", "width", "height"] {
            let emitted = rules.translate("lv_label", key, &PropValue::Num(5.0), "w");
            assert_eq!(emitted.class, EmitClass::Geometry);
            assert!(emitted.statement.is_none());
        }
    }

    #[test]
    fn geometry_defaults_are_0_0_100_50() {
        let node = Node::new("label");
        let [pos, size] = geometry_statements(&node, "w");
        assert_eq!(pos, "lv_obj_set_pos(w, 0, 0);");
        assert_eq!(size, "lv_obj_set_size(w, 100, 50);");
    }

    #[test]
    fn geometry_uses_present_properties() {
        let node = Node::new("label")
            .with_property("x", 10.0)
            .with_property("y", 20.0)
            .with_property("width", 200.0)
            .with_property("height", 80.0);
        let [pos, size] = geometry_statements(&node, "w");
        assert_eq!(pos, "lv_obj_set_pos(w, 10, 20);");
        assert_eq!(size, "lv_obj_set_size(w, 200, 80);");
    }

    #[test]
    fn style_table_applies_to_any_kind() {
        let rules = RuleSet::new();
        let emitted = rules.translate("lv_slider", "radius", &PropValue::Num(8.0), "w");
        assert_eq!(emitted.class, EmitClass::Style);
        assert_eq!(
            emitted.statement.as_deref(),
            Some("lv_obj_set_style_radius(w, 8, 0);")
        );
    }

    #[test]
    fn color_values_become_hex_construction_calls() {
        let rules = RuleSet::new();
        let emitted = rules.translate("lv_obj", "bg_color", &PropValue::from("#112233"), "w");
        assert_eq!(
            emitted.statement.as_deref(),
            Some("lv_obj_set_style_bg_color(w, lv_color_hex(0x112233), 0);")
        );
    }

    #[test]
    fn label_text_is_quoted_with_escapes() {
        let rules = RuleSet::new();
        let emitted = rules.translate(
            "lv_label",
            "text",
            &PropValue::from(r#"say "hi" \ bye"#),
            "w",
        );
        assert_eq!(emitted.class, EmitClass::Widget);
        assert_eq!(
            emitted.statement.as_deref(),
            Some(r#"lv_label_set_text(w, "say \"hi\" \\ bye");"#)
        );
    }

    #[test]
    fn checked_true_emits_state_false_emits_nothing() {
        let rules = RuleSet::new();
        let on = rules.translate("lv_switch", "checked", &PropValue::Bool(true), "w");
        assert_eq!(
            on.statement.as_deref(),
            Some("lv_obj_add_state(w, LV_STATE_CHECKED);")
        );

        let off = rules.translate("lv_switch", "checked", &PropValue::Bool(false), "w");
        assert_eq!(off.class, EmitClass::Widget);
        assert!(off.statement.is_none());
    }

    #[test]
    fn flex_flow_uppercases_into_the_enum_token() {
        let rules = RuleSet::new();
        let emitted = rules.translate("lv_obj", "flex_flow", &PropValue::from("row_wrap"), "w");
        assert_eq!(
            emitted.statement.as_deref(),
            Some("lv_obj_set_flex_flow(w, LV_FLEX_FLOW_ROW_WRAP);")
        );
    }

    #[test]
    fn slider_value_carries_anim_off() {
        let rules = RuleSet::new();
        let emitted = rules.translate("lv_slider", "value", &PropValue::Num(42.0), "w");
        assert_eq!(
            emitted.statement.as_deref(),
            Some("lv_slider_set_value(w, 42, LV_ANIM_OFF);")
        );

        let arc = rules.translate("lv_arc", "value", &PropValue::Num(42.0), "w");
        assert_eq!(arc.statement.as_deref(), Some("lv_arc_set_value(w, 42);"));
    }

    #[test]
    fn led_color_uses_the_color_construction_call() {
        let rules = RuleSet::new();
        let emitted = rules.translate("lv_led", "color", &PropValue::from("#ff0000"), "w");
        assert_eq!(
            emitted.statement.as_deref(),
            Some("lv_led_set_color(w, lv_color_hex(0xff0000));")
        );
    }

    #[test]
    fn unrecognized_properties_are_silently_skipped() {
        let rules = RuleSet::new();
        // Not a label property.
        let emitted = rules.translate("lv_label", "options", &PropValue::from("a"), "w");
        assert_eq!(emitted.class, EmitClass::Skipped);
        assert!(emitted.statement.is_none());

        // Unmodeled attribute passes through the model untouched and is
        // never interpreted here.
        let emitted = rules.translate("lv_label", "my_custom", &PropValue::Num(1.0), "w");
        assert_eq!(emitted.class, EmitClass::Skipped);
    }

    #[test]
    fn booleans_render_as_bare_tokens() {
        let rules = RuleSet::new();
        let emitted = rules.translate("lv_textarea", "one_line", &PropValue::Bool(true), "w");
        assert_eq!(
            emitted.statement.as_deref(),
            Some("lv_textarea_set_one_line(w, true);")
        );
    }
}
