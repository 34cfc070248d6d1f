//! Document shape classification.
//!
//! Classification is a pure, total function over loaded values. An explicit
//! `type:` tag naming a shape always wins; otherwise the document is sniffed
//! by the keys it carries, hierarchical shapes first because their keys
//! overlap with the flat ones.

use serde_yaml::Value;

use netdot_core::shape::Shape;

/// Classify a loaded document.
///
/// Returns `None` when `value` is not a mapping or matches no shape.
///
/// # Examples
///
/// ```
/// use netdot_core::shape::Shape;
/// use netdot_parser::{classify, load};
///
/// let doc = load("serverId: web-01\nos: {type: linux}").unwrap();
/// assert_eq!(classify(&doc), Some(Shape::ServerDetails));
///
/// let doc = load(r#"{"foo": "bar"}"#).unwrap();
/// assert_eq!(classify(&doc), None);
/// ```
pub fn classify(value: &Value) -> Option<Shape> {
    if !value.is_mapping() {
        return None;
    }

    let declared = value
        .get("type")
        .and_then(Value::as_str)
        .and_then(Shape::from_tag);
    if declared.is_some() {
        return declared;
    }

    let has = |key: &str| value.get(key).is_some_and(is_present);

    if has("sites") {
        Some(Shape::SiteTopology)
    } else if has("racks") && has("siteId") {
        Some(Shape::SiteEquipment)
    } else if has("servers") && has("rackId") {
        Some(Shape::RackServers)
    } else if has("serverId") && (has("os") || has("sequences")) {
        Some(Shape::ServerDetails)
    } else if has("layers") {
        Some(Shape::Topology)
    } else if has("ports") {
        Some(Shape::Device)
    } else if has("connections") {
        Some(Shape::Links)
    } else if has("rules") {
        Some(Shape::Intent)
    } else {
        None
    }
}

/// A key counts as present unless its value is null, `false`, zero or the
/// empty string. Empty sequences and mappings are present.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}
