//! The widget node model.
//!
//! A [`Node`] is one widget instance: a kind, a stable id, a code-facing
//! name, an insertion-ordered property map, and an ordered child list.
//! Nesting encodes parent/child widget containment.

use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use rand::Rng;

/// Namespace prefix carried by every widget kind.
pub const KIND_PREFIX: &str = "lv_";

/// A scalar property value.
///
/// Attribute text is coerced at parse time: numeric-looking strings become
/// [`PropValue::Num`], the literals `true`/`false` become
/// [`PropValue::Bool`], everything else stays a string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropValue {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl PropValue {
    /// Coerce raw attribute text into a typed value.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => PropValue::Bool(true),
            "false" => PropValue::Bool(false),
            _ => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => PropValue::Num(n),
                _ => PropValue::Str(raw.to_string()),
            },
        }
    }

    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number if it's a number value.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            PropValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean if it's a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the canonical attribute text for this value.
    ///
    /// Integral numbers drop their fractional part so that `5.0` serializes
    /// as `5` and parses back to the same value.
    pub fn to_markup_string(&self) -> String {
        match self {
            PropValue::Str(s) => s.clone(),
            PropValue::Num(n) => format_number(*n),
            PropValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Num(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// Render a number without a trailing `.0` when it is integral.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One widget instance and its subtree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Stable identity, unique within the owning document. Immutable after
    /// creation; duplication mints fresh ids.
    id: String,
    /// Canonical widget-type identifier, always `lv_`-prefixed.
    pub kind: String,
    /// Code-facing identifier, used as the generated variable name.
    ///
    /// Not validated as a C identifier; a name containing characters invalid
    /// in the target language produces invalid generated code (host
    /// responsibility).
    pub name: String,
    /// Widget/style properties in insertion order. `id` and `name` are
    /// reserved and never appear here.
    pub properties: IndexMap<String, PropValue>,
    /// Ordered children, document order preserved.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node of the given kind with a freshly minted id.
    ///
    /// The kind is prefixed with [`KIND_PREFIX`] if it isn't already; the
    /// name defaults to the stripped kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_id(kind, mint_id())
    }

    /// Create a node with an explicit id (parser/deserialization entry
    /// point). An empty id is replaced with a minted one.
    pub fn with_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        let kind = prefix_kind(&kind.into());
        let id = id.into();
        let id = if id.is_empty() { mint_id() } else { id };
        let name = strip_kind(&kind).to_string();
        Self {
            id,
            kind,
            name,
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the node name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// The node's stable identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The kind without its namespace prefix.
    pub fn stripped_kind(&self) -> &str {
        strip_kind(&self.kind)
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropValue> {
        self.properties.get(key)
    }

    /// Check if the node has a property.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Deep copy with fresh ids for the copy and every descendant.
    pub fn duplicate(&self) -> Node {
        let mut copy = self.clone();
        copy.remint_ids();
        copy
    }

    fn remint_ids(&mut self) {
        self.id = mint_id();
        for child in &mut self.children {
            child.remint_ids();
        }
    }

    /// Iterate the subtree in document order (self first, then children).
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            for child in node.children.iter().rev() {
                stack.push(child);
            }
            Some(node)
        })
    }
}

/// Ensure a kind carries the namespace prefix.
pub fn prefix_kind(kind: &str) -> String {
    if kind.starts_with(KIND_PREFIX) {
        kind.to_string()
    } else {
        format!("{}{}", KIND_PREFIX, kind)
    }
}

/// Strip the namespace prefix from a kind.
pub fn strip_kind(kind: &str) -> &str {
    kind.strip_prefix(KIND_PREFIX).unwrap_or(kind)
}

/// Mint a document-unique id: millisecond timestamp plus a random suffix.
pub fn mint_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::thread_rng().gen_range(0..0x10000);
    format!("w{:x}{:04x}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_attribute_text() {
        assert_eq!(PropValue::coerce("true"), PropValue::Bool(true));
        assert_eq!(PropValue::coerce("false"), PropValue::Bool(false));
        assert_eq!(PropValue::coerce("42"), PropValue::Num(42.0));
        assert_eq!(PropValue::coerce("-3.5"), PropValue::Num(-3.5));
        assert_eq!(PropValue::coerce("Hi"), PropValue::Str("Hi".to_string()));
        assert_eq!(
            PropValue::coerce("#112233"),
            PropValue::Str("#112233".to_string())
        );
    }

    #[test]
    fn integral_numbers_serialize_bare() {
        assert_eq!(PropValue::Num(5.0).to_markup_string(), "5");
        assert_eq!(PropValue::Num(5.5).to_markup_string(), "5.5");
        assert_eq!(PropValue::Num(-12.0).to_markup_string(), "-12");
    }

    #[test]
    fn new_node_prefixes_kind_and_defaults_name() {
        let node = Node::new("label");
        assert_eq!(node.kind, "lv_label");
        assert_eq!(node.name, "label");
        assert!(!node.id().is_empty());

        let node = Node::new("lv_button");
        assert_eq!(node.kind, "lv_button");
        assert_eq!(node.stripped_kind(), "button");
    }

    #[test]
    fn with_id_replaces_empty_id() {
        let node = Node::with_id("label", "");
        assert!(!node.id().is_empty());

        let node = Node::with_id("label", "t1");
        assert_eq!(node.id(), "t1");
    }

    #[test]
    fn builder_style_construction() {
        let node = Node::new("label")
            .with_name("title")
            .with_property("text", "Hi")
            .with_property("x", 10.0)
            .with_child(Node::new("button"));

        assert_eq!(node.name, "title");
        assert_eq!(node.get_property("text"), Some(&PropValue::from("Hi")));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn duplicate_mints_fresh_ids_recursively() {
        let original = Node::new("obj")
            .with_child(Node::new("label"))
            .with_child(Node::new("button").with_child(Node::new("label")));

        let copy = original.duplicate();

        let original_ids: Vec<&str> = original.walk().map(|n| n.id()).collect();
        let copy_ids: Vec<&str> = copy.walk().map(|n| n.id()).collect();
        assert_eq!(original_ids.len(), copy_ids.len());
        for id in &copy_ids {
            assert!(!original_ids.contains(id));
        }

        // Everything but identity is preserved.
        assert_eq!(copy.kind, original.kind);
        assert_eq!(copy.name, original.name);
        assert_eq!(copy.children.len(), original.children.len());
    }

    #[test]
    fn walk_is_document_order() {
        let tree = Node::with_id("obj", "a")
            .with_child(Node::with_id("label", "b").with_child(Node::with_id("led", "c")))
            .with_child(Node::with_id("button", "d"));

        let ids: Vec<&str> = tree.walk().map(|n| n.id()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }
}
