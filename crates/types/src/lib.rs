//! Shared descriptor types for the projected management interface.
//!
//! These are the value objects handed to the protocol exposure layer: one
//! addressable resource rendered as a typed interface with attributes and
//! invocable operations. Everything here is immutable once assembled and
//! carries no behavior beyond construction.

use serde::{Deserialize, Serialize};

/// Type name stamped on every projected interface description.
pub const RESOURCE_TYPE_NAME: &str = "vantage.management.Resource";

/// Placeholder used wherever the source model carries no description text.
pub const NO_DESCRIPTION: &str = "-";

/// Target type descriptor for attributes, parameters, and return values.
///
/// Conversion from the source model is total: declared shapes with no precise
/// target mapping land on [`InterfaceType::Opaque`] instead of failing, so a
/// projection always completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterfaceType {
    Boolean,
    Integer,
    Long,
    Double,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Arbitrary-precision integer.
    BigInteger,
    String,
    /// Raw byte payload.
    Binary,
    /// No value; only meaningful as an operation return type.
    Void,
    /// Homogeneous sequence of the element type.
    Array(Box<InterfaceType>),
    /// Record type with one field per declared property.
    Composite(CompositeType),
    /// Generic fallback for shapes with no precise target mapping.
    Opaque,
}

/// Record type backing [`InterfaceType::Composite`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositeType {
    /// Declared properties of the composite, in declaration order.
    pub fields: Vec<CompositeField>,
}

/// One declared property of a composite type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeField {
    /// Property name as declared in the source model.
    pub name: String,
    /// Description text, or the `-` placeholder when absent.
    pub description: String,
    /// Converted property type.
    pub field_type: InterfaceType,
}

/// A projected resource attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceAttribute {
    /// Camel-cased attribute name, unique within one description.
    pub name: String,
    /// Description text from the source document, or `-` when absent.
    pub description: String,
    /// Converted attribute type.
    pub attribute_type: InterfaceType,
    /// Exposed attributes are always readable.
    pub readable: bool,
    /// Derived from the access-control lookup; attributes without an entry
    /// project as read-only.
    pub writable: bool,
    /// Never set by this projection.
    pub is_index: bool,
}

/// A single request parameter of a projected operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceParameter {
    /// Camel-cased parameter name.
    pub name: String,
    /// Description text, or `-` when absent.
    pub description: String,
    /// Converted parameter type.
    pub parameter_type: InterfaceType,
}

/// Side-effect classification of a projected operation.
///
/// The source model declares nothing about impact, so the projection always
/// emits [`OperationImpact::Unknown`]; the other variants exist for protocol
/// layers that classify operations themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationImpact {
    /// Write-like: changes the state of the resource.
    Action,
    /// Read-like: returns information without side effects.
    Info,
    /// Both returns information and changes state.
    ActionInfo,
    #[default]
    Unknown,
}

/// A projected, externally invocable operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceOperation {
    /// Camel-cased operation name, unique within one description.
    pub name: String,
    /// Description text, or `-` when absent.
    pub description: String,
    /// Request parameters in declaration order. Derived add-child operations
    /// for wildcard child types carry the instance-name parameter first.
    pub parameters: Vec<InterfaceParameter>,
    /// Converted reply type; [`InterfaceType::Void`] when the operation
    /// declares no reply properties.
    pub return_type: InterfaceType,
    pub impact: OperationImpact,
}

/// Constructor descriptor.
///
/// The projection never emits any; the type exists so the description shape
/// matches what a protocol layer expects to consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceConstructor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<InterfaceParameter>,
}

/// Notification descriptor.
///
/// Event/notification mapping is outside this projection; the list in a
/// produced description is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceNotification {
    pub name: String,
    pub description: String,
    pub notification_type: String,
}

/// The complete typed interface description of one resource.
///
/// A per-request value object: callers may cache it, but nothing in the
/// engine shares or reuses one between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDescription {
    /// Always [`RESOURCE_TYPE_NAME`].
    pub type_name: String,
    /// Resource description text, or `-` when the source document has none.
    pub description: String,
    pub attributes: Vec<InterfaceAttribute>,
    /// Always empty.
    pub constructors: Vec<InterfaceConstructor>,
    /// Explicit operations plus derived add-child operations.
    pub operations: Vec<InterfaceOperation>,
    /// Always empty.
    pub notifications: Vec<InterfaceNotification>,
}

impl InterfaceDescription {
    /// Assembles a description with the fixed type name and the empty
    /// constructor and notification lists.
    pub fn new(
        description: String,
        attributes: Vec<InterfaceAttribute>,
        operations: Vec<InterfaceOperation>,
    ) -> Self {
        Self {
            type_name: RESOURCE_TYPE_NAME.to_string(),
            description,
            attributes,
            constructors: Vec::new(),
            operations,
            notifications: Vec::new(),
        }
    }
}
