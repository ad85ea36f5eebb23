//! The widget registry: a read-only catalog of widget-kind definitions.
//!
//! The catalog drives the editor palette and the code emitter's constructor
//! lookup. The core never mutates it; lookups are by exact kind.

use crate::node::{prefix_kind, PropValue};

/// Value kind of a declared widget property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropKind {
    Str,
    Num,
    Bool,
    Color,
    Enum,
}

/// A typed property declaration on a widget kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySpec {
    pub name: String,
    pub kind: PropKind,
    /// Default value shown by the editor; the emitter substitutes its own
    /// geometry defaults independently.
    pub default: Option<PropValue>,
    /// Enumerated choices for `PropKind::Enum`.
    pub options: Vec<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// UI grouping for the property inspector.
    pub group: String,
}

impl PropertySpec {
    pub fn new(name: &str, kind: PropKind, group: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: None,
            options: Vec::new(),
            min: None,
            max: None,
            group: group.to_string(),
        }
    }

    pub fn with_default(mut self, default: impl Into<PropValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// One widget-kind definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetSpec {
    /// Canonical prefixed kind, e.g. `lv_label`.
    pub kind: String,
    /// Display name for the editor palette.
    pub display_name: String,
    /// Construction function invoked by the emitter.
    pub constructor: String,
    /// Declared properties beyond the shared geometry/style set.
    pub properties: Vec<PropertySpec>,
    pub can_have_children: bool,
}

impl WidgetSpec {
    fn new(kind: &str, display_name: &str, can_have_children: bool) -> Self {
        let kind = prefix_kind(kind);
        let constructor = format!("{}_create", kind);
        Self {
            kind,
            display_name: display_name.to_string(),
            constructor,
            properties: Vec::new(),
            can_have_children,
        }
    }

    fn with_properties(mut self, properties: Vec<PropertySpec>) -> Self {
        self.properties = properties;
        self
    }
}

/// An ordered catalog of widget kinds.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetRegistry {
    widgets: Vec<WidgetSpec>,
}

impl WidgetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an externally supplied catalog.
    pub fn from_specs(widgets: Vec<WidgetSpec>) -> Self {
        Self { widgets }
    }

    /// Look up a widget kind by exact match.
    pub fn get(&self, kind: &str) -> Option<&WidgetSpec> {
        self.widgets.iter().find(|w| w.kind == kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.get(kind).is_some()
    }

    /// Iterate the catalog in its declared order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetSpec> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The stock LVGL widget catalog.
    pub fn builtin() -> Self {
        use PropKind::*;

        let widgets = vec![
            WidgetSpec::new("obj", "Container", true).with_properties(vec![
                PropertySpec::new("layout", Enum, "layout")
                    .with_options(&["none", "flex", "grid"])
                    .with_default("flex"),
                PropertySpec::new("flex_flow", Enum, "layout").with_options(&[
                    "row",
                    "column",
                    "row_wrap",
                    "column_wrap",
                ]),
            ]),
            WidgetSpec::new("label", "Label", false).with_properties(vec![
                PropertySpec::new("text", Str, "content").with_default("Label"),
                PropertySpec::new("long_mode", Enum, "content").with_options(&[
                    "wrap",
                    "dot",
                    "scroll",
                    "clip",
                ]),
            ]),
            WidgetSpec::new("button", "Button", true),
            WidgetSpec::new("switch", "Switch", false).with_properties(vec![
                PropertySpec::new("checked", Bool, "state").with_default(false),
            ]),
            WidgetSpec::new("checkbox", "Checkbox", false).with_properties(vec![
                PropertySpec::new("text", Str, "content").with_default("Checkbox"),
                PropertySpec::new("checked", Bool, "state").with_default(false),
            ]),
            WidgetSpec::new("slider", "Slider", false).with_properties(vec![
                PropertySpec::new("value", Num, "value")
                    .with_default(0.0)
                    .with_range(0.0, 100.0),
            ]),
            WidgetSpec::new("bar", "Bar", false).with_properties(vec![
                PropertySpec::new("value", Num, "value")
                    .with_default(0.0)
                    .with_range(0.0, 100.0),
            ]),
            WidgetSpec::new("arc", "Arc", false).with_properties(vec![
                PropertySpec::new("value", Num, "value")
                    .with_default(0.0)
                    .with_range(0.0, 100.0),
            ]),
            WidgetSpec::new("dropdown", "Dropdown", false).with_properties(vec![
                PropertySpec::new("options", Str, "content"),
                PropertySpec::new("selected", Num, "state").with_default(0.0),
            ]),
            WidgetSpec::new("roller", "Roller", false).with_properties(vec![
                PropertySpec::new("options", Str, "content"),
                PropertySpec::new("selected", Num, "state").with_default(0.0),
            ]),
            WidgetSpec::new("textarea", "Text area", false).with_properties(vec![
                PropertySpec::new("text", Str, "content"),
                PropertySpec::new("placeholder", Str, "content"),
                PropertySpec::new("one_line", Bool, "behavior").with_default(false),
                PropertySpec::new("password_mode", Bool, "behavior").with_default(false),
            ]),
            WidgetSpec::new("image", "Image", false).with_properties(vec![
                PropertySpec::new("src", Str, "content"),
                PropertySpec::new("zoom", Num, "transform").with_default(256.0),
                PropertySpec::new("angle", Num, "transform").with_default(0.0),
            ]),
            WidgetSpec::new("led", "LED", false).with_properties(vec![
                PropertySpec::new("color", Color, "style"),
                PropertySpec::new("brightness", Num, "state")
                    .with_default(255.0)
                    .with_range(0.0, 255.0),
            ]),
            WidgetSpec::new("spinner", "Spinner", false),
        ];

        Self { widgets }
    }
}
