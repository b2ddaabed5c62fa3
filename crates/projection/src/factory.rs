//! Assembly of the projected interface description for one resource.

use crate::{ProjectionError, convert_to_interface_type, find_add_child_operations, name};
use serde_json::Value;
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, warn};
use vantage_model::{AccessKind, DescriptionProvider, PathAddress, ResourceRegistration, has_defined, keys};
use vantage_types::{
    InterfaceAttribute, InterfaceDescription, InterfaceOperation, InterfaceParameter, InterfaceType,
    NO_DESCRIPTION, OperationImpact,
};

/// Global operations excluded from the root resource's operation list.
///
/// At the root these are introspection and bulk plumbing reached through
/// dedicated protocol surfaces; projecting them as individually invocable
/// operations would duplicate that plumbing. Non-root resources keep their
/// full explicit operation set.
pub const ROOT_EXCLUDED_OPERATIONS: &[&str] = &[
    keys::READ_RESOURCE,
    keys::READ_ATTRIBUTE,
    keys::WRITE_ATTRIBUTE,
    keys::READ_RESOURCE_DESCRIPTION,
    keys::READ_CHILDREN_NAMES,
    keys::READ_CHILDREN_TYPES,
    keys::READ_CHILDREN_RESOURCES,
    keys::READ_OPERATION_NAMES,
    keys::READ_OPERATION_DESCRIPTION,
    keys::VALIDATE_ADDRESS,
    keys::COMPOSITE,
    keys::UPLOAD_CONTENT_STREAM,
];

/// Lifecycle operations never exposed directly at any address; the derived
/// add-child mechanism on the parent supersedes them.
const SUPPRESSED_LIFECYCLE_OPERATIONS: &[&str] = &[keys::ADD, keys::DESCRIBE];

/// Projects the resource at `address` into an interface description.
///
/// # Errors
///
/// Returns [`ProjectionError::ResourceNotFound`] when no registration exists
/// at `address`. Every other irregularity in the source model is absorbed:
/// missing documents, access-control entries, and reply properties are
/// defaulted so the projection always completes.
pub fn interface_description(
    address: &PathAddress,
    registration: &ResourceRegistration,
) -> Result<InterfaceDescription, ProjectionError> {
    let Some(resource) = registration.subregistration(address) else {
        return Err(ProjectionError::ResourceNotFound {
            address: address.clone(),
        });
    };
    Ok(InterfaceFactory::new(address, resource).build())
}

struct InterfaceFactory<'a> {
    address: &'a PathAddress,
    resource: &'a ResourceRegistration,
    provided_description: Value,
}

impl<'a> InterfaceFactory<'a> {
    fn new(address: &'a PathAddress, resource: &'a ResourceRegistration) -> Self {
        // A resource without a description document projects as an empty one.
        let provided_description = resource
            .model_description()
            .map(|provider| provider.model_description())
            .unwrap_or(Value::Null);
        Self {
            address,
            resource,
            provided_description,
        }
    }

    fn build(&self) -> InterfaceDescription {
        let description =
            InterfaceDescription::new(self.description(), self.attributes(), self.operations());
        debug!(
            address = %self.address,
            attributes = description.attributes.len(),
            operations = description.operations.len(),
            "assembled interface description"
        );
        description
    }

    fn description(&self) -> String {
        text_or_placeholder(&self.provided_description)
    }

    fn attributes(&self) -> Vec<InterfaceAttribute> {
        let Some(declared) = self
            .provided_description
            .get(keys::ATTRIBUTES)
            .and_then(Value::as_object)
        else {
            return Vec::new();
        };
        let mut attributes: Vec<InterfaceAttribute> = Vec::new();
        let mut seen = HashSet::new();
        for (source_name, node) in declared {
            if node.is_null() {
                continue;
            }
            let converted = self.attribute(source_name, node);
            if !seen.insert(converted.name.clone()) {
                warn!(
                    attribute = %source_name,
                    projected = %converted.name,
                    "duplicate projected attribute name, dropping"
                );
                continue;
            }
            attributes.push(converted);
        }
        attributes
    }

    fn attribute(&self, source_name: &str, node: &Value) -> InterfaceAttribute {
        let access = self.resource.attribute_access(source_name);
        InterfaceAttribute {
            name: name::convert_to_camel_case(source_name),
            description: text_or_placeholder(node),
            attribute_type: convert_to_interface_type(node),
            readable: true,
            writable: access.is_some_and(AccessKind::is_writable),
            is_index: false,
        }
    }

    fn operations(&self) -> Vec<InterfaceOperation> {
        let root = self.address.is_root();
        let mut operations = Vec::new();
        let mut projected_names = HashSet::new();

        for (operation_name, entry) in self.resource.operations(false) {
            if SUPPRESSED_LIFECYCLE_OPERATIONS.contains(&operation_name) {
                continue;
            }
            if root && ROOT_EXCLUDED_OPERATIONS.contains(&operation_name) {
                continue;
            }
            let projected = self.operation(
                name::convert_to_camel_case(operation_name),
                None,
                entry.description_provider(),
            );
            if projected_names.insert(projected.name.clone()) {
                operations.push(projected);
            } else {
                warn!(operation = %operation_name, "duplicate projected operation name, dropping");
            }
        }

        self.append_child_add_operations(&mut operations, &mut projected_names);
        operations
    }

    fn append_child_add_operations(
        &self,
        operations: &mut Vec<InterfaceOperation>,
        projected_names: &mut HashSet<String>,
    ) {
        for (child_key, child_add) in find_add_child_operations(self.resource) {
            let operation_name = name::add_operation_name(&child_key);
            if projected_names.contains(&operation_name) {
                // Explicit registrations take precedence over derived ones.
                warn!(
                    operation = %operation_name,
                    child = %child_key,
                    "derived add operation collides with an explicit operation, suppressing"
                );
                continue;
            }
            let instance_name_parameter =
                child_add.element().is_wildcard().then(|| InterfaceParameter {
                    name: "name".to_string(),
                    description: format!("The name of the {child_key} to add."),
                    parameter_type: InterfaceType::String,
                });
            let projected = self.operation(
                operation_name,
                instance_name_parameter,
                child_add.description_provider(),
            );
            projected_names.insert(projected.name.clone());
            operations.push(projected);
        }
    }

    fn operation(
        &self,
        projected_name: String,
        leading_parameter: Option<InterfaceParameter>,
        provider: &Arc<dyn DescriptionProvider>,
    ) -> InterfaceOperation {
        let document = provider.model_description();
        let mut parameters = request_parameters(&document);
        if let Some(leading) = leading_parameter {
            parameters.insert(0, leading);
        }
        InterfaceOperation {
            name: projected_name,
            description: text_or_placeholder(&document),
            parameters,
            return_type: return_type(&document),
            impact: OperationImpact::Unknown,
        }
    }
}

/// Description text of a document node when present and non-empty, the `-`
/// placeholder otherwise.
fn text_or_placeholder(document: &Value) -> String {
    document
        .get(keys::DESCRIPTION)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_DESCRIPTION)
        .to_string()
}

/// Request parameters declared on an operation document, in declaration
/// order.
fn request_parameters(document: &Value) -> Vec<InterfaceParameter> {
    let Some(declared) = document
        .get(keys::REQUEST_PROPERTIES)
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };
    declared
        .iter()
        .map(|(source_name, node)| InterfaceParameter {
            name: name::convert_to_camel_case(source_name),
            description: text_or_placeholder(node),
            parameter_type: convert_to_interface_type(node),
        })
        .collect()
}

/// Return type from an operation document's declared reply properties.
///
/// Absent or empty reply properties mean the operation returns nothing. At
/// most one reply node is honored; when the source declares a list, only the
/// first entry is projected.
fn return_type(document: &Value) -> InterfaceType {
    if !has_defined(document, keys::REPLY_PROPERTIES) {
        return InterfaceType::Void;
    }
    match &document[keys::REPLY_PROPERTIES] {
        Value::Array(entries) => match entries.first() {
            Some(first) => convert_to_interface_type(first),
            None => InterfaceType::Void,
        },
        Value::Object(fields) if fields.is_empty() => InterfaceType::Void,
        node => convert_to_interface_type(node),
    }
}
