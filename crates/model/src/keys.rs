//! Document keys and operation names understood by the projection.

/// Description text of a resource, operation, attribute, or parameter.
pub const DESCRIPTION: &str = "description";
/// Mapping of attribute name to attribute description document.
pub const ATTRIBUTES: &str = "attributes";
/// Declared type tag of an attribute or parameter.
pub const TYPE: &str = "type";
/// Nested element or property schema of a `list` or `object` type.
pub const VALUE_TYPE: &str = "value-type";
/// Ordered mapping of request parameter name to description document.
pub const REQUEST_PROPERTIES: &str = "request-properties";
/// Reply description node of an operation.
pub const REPLY_PROPERTIES: &str = "reply-properties";

/// Child creation, superseded by derived add-child operations on the parent.
pub const ADD: &str = "add";
/// Subtree re-creation plan, internal plumbing only.
pub const DESCRIBE: &str = "describe";

pub const READ_RESOURCE: &str = "read-resource";
pub const READ_ATTRIBUTE: &str = "read-attribute";
pub const WRITE_ATTRIBUTE: &str = "write-attribute";
pub const READ_RESOURCE_DESCRIPTION: &str = "read-resource-description";
pub const READ_CHILDREN_NAMES: &str = "read-children-names";
pub const READ_CHILDREN_TYPES: &str = "read-children-types";
pub const READ_CHILDREN_RESOURCES: &str = "read-children-resources";
pub const READ_OPERATION_NAMES: &str = "read-operation-names";
pub const READ_OPERATION_DESCRIPTION: &str = "read-operation-description";
pub const VALIDATE_ADDRESS: &str = "validate-address";
pub const COMPOSITE: &str = "composite";
pub const UPLOAD_CONTENT_STREAM: &str = "upload-content-stream";
