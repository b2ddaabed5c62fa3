//! Derivation of implicit "add child" operations from declared child types.
//!
//! A child type being addressable implies its parent can create instances of
//! it, even though no operation named after the child is registered anywhere.
//! The payload shape of the derived operation comes from the child's own
//! `add` operation description; the name and the leading instance-name
//! parameter come from the parent's perspective.

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;
use vantage_model::{DescriptionProvider, PathElement, ResourceRegistration, keys};

/// One derived add-child operation.
#[derive(Clone)]
pub struct ChildAddOperation {
    element: PathElement,
    provider: Arc<dyn DescriptionProvider>,
}

impl ChildAddOperation {
    /// The child path element the operation was derived from; wildcard
    /// elements require the caller to supply an instance name.
    pub fn element(&self) -> &PathElement {
        &self.element
    }

    /// Description of the child's own `add` operation.
    pub fn description_provider(&self) -> &Arc<dyn DescriptionProvider> {
        &self.provider
    }
}

/// Collects the derived add-child operations for the immediate children of
/// `registration`, exactly one entry per distinct child path-element key.
///
/// A wildcard registration takes precedence over a fixed one under the same
/// key; children with no `add` operation of their own are skipped, since
/// there is no payload description to project.
pub fn find_add_child_operations(
    registration: &ResourceRegistration,
) -> IndexMap<String, ChildAddOperation> {
    let mut operations: IndexMap<String, ChildAddOperation> = IndexMap::new();
    for (element, child) in registration.children() {
        let Some(add_entry) = child.operation_entry(keys::ADD) else {
            debug!(child = %element, "child type has no add operation, skipping");
            continue;
        };
        match operations.get(element.key()) {
            // Wildcard parameter synthesis wins when both forms are
            // registered under one key.
            Some(existing) if existing.element.is_wildcard() || !element.is_wildcard() => {}
            _ => {
                operations.insert(
                    element.key().to_string(),
                    ChildAddOperation {
                        element: element.clone(),
                        provider: Arc::clone(add_entry.description_provider()),
                    },
                );
            }
        }
    }
    operations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn child_with_add(description: &str) -> vantage_model::ResourceRegistrationBuilder {
        ResourceRegistration::builder().operation(keys::ADD, json!({"description": description}))
    }

    #[test]
    fn one_entry_per_child_key() {
        let tree = ResourceRegistration::builder()
            .child(PathElement::wildcard("connector"), child_with_add("add a connector"))
            .child(PathElement::of("subsystem", "web"), child_with_add("add the web subsystem"))
            .build();
        let operations = find_add_child_operations(&tree);
        assert_eq!(operations.len(), 2);
        assert!(operations["connector"].element().is_wildcard());
        assert!(!operations["subsystem"].element().is_wildcard());
    }

    #[test]
    fn wildcard_takes_precedence_over_fixed_under_one_key() {
        let tree = ResourceRegistration::builder()
            .child(PathElement::of("connector", "http"), child_with_add("fixed"))
            .child(PathElement::wildcard("connector"), child_with_add("wildcard"))
            .build();
        let operations = find_add_child_operations(&tree);
        assert_eq!(operations.len(), 1);
        let entry = &operations["connector"];
        assert!(entry.element().is_wildcard());
        assert_eq!(entry.description_provider().model_description()["description"], "wildcard");

        // Same outcome regardless of registration order.
        let reversed = ResourceRegistration::builder()
            .child(PathElement::wildcard("connector"), child_with_add("wildcard"))
            .child(PathElement::of("connector", "http"), child_with_add("fixed"))
            .build();
        assert!(find_add_child_operations(&reversed)["connector"].element().is_wildcard());
    }

    #[test]
    fn children_without_an_add_operation_are_skipped() {
        let tree = ResourceRegistration::builder()
            .child(
                PathElement::of("path", "base-dir"),
                ResourceRegistration::builder().operation("read-resource", json!({})),
            )
            .child(PathElement::wildcard("connector"), child_with_add("add a connector"))
            .build();
        let operations = find_add_child_operations(&tree);
        assert_eq!(operations.len(), 1);
        assert!(operations.contains_key("connector"));
    }

    #[test]
    fn no_children_derive_nothing() {
        let tree = ResourceRegistration::builder().build();
        assert!(find_add_child_operations(&tree).is_empty());
    }
}
