//! Conversion of declared source-model types into interface type
//! descriptors.

use serde_json::{Map, Value};
use vantage_model::{ModelKind, keys};
use vantage_types::{CompositeField, CompositeType, InterfaceType, NO_DESCRIPTION};

/// Converts a description node's declared type into an interface type.
///
/// Total over any input: unrecognized tags, undeclared element types, and
/// schema-less composites all land on [`InterfaceType::Opaque`] so the
/// projection always completes.
pub fn convert_to_interface_type(node: &Value) -> InterfaceType {
    let Some(kind) = ModelKind::of(node) else {
        return InterfaceType::Opaque;
    };
    if let Some(scalar) = scalar_of(kind) {
        return scalar;
    }
    match kind {
        ModelKind::List => InterfaceType::Array(Box::new(element_type(node))),
        ModelKind::Object => object_type(node),
        _ => InterfaceType::Opaque,
    }
}

/// Direct scalar mapping of a declared kind, absent for structured kinds.
fn scalar_of(kind: ModelKind) -> Option<InterfaceType> {
    match kind {
        ModelKind::Boolean => Some(InterfaceType::Boolean),
        ModelKind::Int => Some(InterfaceType::Integer),
        ModelKind::Long => Some(InterfaceType::Long),
        ModelKind::Double => Some(InterfaceType::Double),
        ModelKind::BigDecimal => Some(InterfaceType::Decimal),
        ModelKind::BigInteger => Some(InterfaceType::BigInteger),
        ModelKind::String | ModelKind::Expression => Some(InterfaceType::String),
        ModelKind::Bytes => Some(InterfaceType::Binary),
        ModelKind::List | ModelKind::Object | ModelKind::Property | ModelKind::Undefined => None,
    }
}

/// Element type of a `list` node, from its `value-type`.
fn element_type(node: &Value) -> InterfaceType {
    match node.get(keys::VALUE_TYPE) {
        // A bare tag names a scalar element type directly.
        Some(Value::String(tag)) => tag
            .parse::<ModelKind>()
            .ok()
            .and_then(scalar_of)
            .unwrap_or(InterfaceType::Opaque),
        Some(value @ Value::Object(spec)) => {
            if has_kind_tag(spec) {
                convert_to_interface_type(value)
            } else {
                composite_of(spec)
            }
        }
        _ => InterfaceType::Opaque,
    }
}

/// Conversion of an `object` node: a property-schema `value-type` becomes a
/// composite, anything else has no precise mapping.
fn object_type(node: &Value) -> InterfaceType {
    match node.get(keys::VALUE_TYPE) {
        Some(Value::Object(properties)) if !has_kind_tag(properties) => composite_of(properties),
        _ => InterfaceType::Opaque,
    }
}

/// Whether a `value-type` object is itself a full descriptor node rather
/// than a property schema.
fn has_kind_tag(spec: &Map<String, Value>) -> bool {
    spec.get(keys::TYPE)
        .and_then(Value::as_str)
        .is_some_and(|tag| tag.parse::<ModelKind>().is_ok())
}

fn composite_of(properties: &Map<String, Value>) -> InterfaceType {
    let fields = properties
        .iter()
        .map(|(property_name, spec)| CompositeField {
            name: property_name.clone(),
            description: spec
                .get(keys::DESCRIPTION)
                .and_then(Value::as_str)
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            field_type: convert_to_interface_type(spec),
        })
        .collect();
    InterfaceType::Composite(CompositeType { fields })
}
