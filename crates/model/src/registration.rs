//! Read-only registration tree: the structural source the projection walks.

use crate::{AccessKind, PathAddress, PathElement};
use indexmap::IndexMap;
use serde_json::Value;
use std::{collections::HashMap, fmt, sync::Arc};

/// Supplies the description document for a resource or operation on demand.
///
/// Descriptions are produced lazily per call so registrations stay cheap to
/// build and documents can be computed when asked for.
pub trait DescriptionProvider: Send + Sync {
    fn model_description(&self) -> Value;
}

impl<F> DescriptionProvider for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn model_description(&self) -> Value {
        self()
    }
}

/// A fixed, precomputed description document.
#[derive(Debug, Clone)]
pub struct StaticDescription(pub Value);

impl DescriptionProvider for StaticDescription {
    fn model_description(&self) -> Value {
        self.0.clone()
    }
}

/// An explicitly registered operation.
#[derive(Clone)]
pub struct OperationEntry {
    provider: Arc<dyn DescriptionProvider>,
    inherited: bool,
}

impl OperationEntry {
    pub fn new(provider: Arc<dyn DescriptionProvider>) -> Self {
        Self {
            provider,
            inherited: false,
        }
    }

    /// An entry contributed by an enclosing scope rather than registered
    /// directly on the resource.
    pub fn inherited(provider: Arc<dyn DescriptionProvider>) -> Self {
        Self {
            provider,
            inherited: true,
        }
    }

    pub fn description_provider(&self) -> &Arc<dyn DescriptionProvider> {
        &self.provider
    }

    pub fn is_inherited(&self) -> bool {
        self.inherited
    }
}

impl fmt::Debug for OperationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationEntry")
            .field("inherited", &self.inherited)
            .finish_non_exhaustive()
    }
}

/// One node of the immutable registration tree.
///
/// Built once through [`ResourceRegistrationBuilder`] and only read
/// afterwards; the tree is `Send + Sync` and safe to share across concurrent
/// projections.
pub struct ResourceRegistration {
    description: Option<Arc<dyn DescriptionProvider>>,
    operations: IndexMap<String, OperationEntry>,
    attribute_access: HashMap<String, AccessKind>,
    children: IndexMap<PathElement, ResourceRegistration>,
}

impl ResourceRegistration {
    pub fn builder() -> ResourceRegistrationBuilder {
        ResourceRegistrationBuilder::default()
    }

    /// Description provider of this resource, absent when none was
    /// registered.
    pub fn model_description(&self) -> Option<&Arc<dyn DescriptionProvider>> {
        self.description.as_ref()
    }

    /// Explicitly registered operations in registration order.
    ///
    /// With `inherited` false, entries contributed by an enclosing scope are
    /// filtered out.
    pub fn operations(&self, inherited: bool) -> impl Iterator<Item = (&str, &OperationEntry)> + '_ {
        self.operations
            .iter()
            .filter(move |(_, entry)| inherited || !entry.is_inherited())
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn operation_entry(&self, name: &str) -> Option<&OperationEntry> {
        self.operations.get(name)
    }

    /// Access-control classification for the attribute `name`, absent when
    /// unknown.
    pub fn attribute_access(&self, name: &str) -> Option<AccessKind> {
        self.attribute_access.get(name).copied()
    }

    /// Declared immediate child types, in registration order.
    pub fn children(&self) -> impl Iterator<Item = (&PathElement, &ResourceRegistration)> + '_ {
        self.children.iter()
    }

    /// Child registration for exactly `element`, with no wildcard fallback.
    pub fn child(&self, element: &PathElement) -> Option<&ResourceRegistration> {
        self.children.get(element)
    }

    /// Resolves the registration `address` points at, relative to this node.
    ///
    /// A named address element resolves to an exact-match child first and
    /// falls back to a wildcard child with the same key; wildcard address
    /// elements resolve to wildcard children only.
    pub fn subregistration(&self, address: &PathAddress) -> Option<&ResourceRegistration> {
        let mut current = self;
        for element in address.elements() {
            current = current.step(element)?;
        }
        Some(current)
    }

    fn step(&self, element: &PathElement) -> Option<&ResourceRegistration> {
        if let Some(child) = self.children.get(element) {
            return Some(child);
        }
        if element.is_wildcard() {
            return None;
        }
        self.children.get(&PathElement::wildcard(element.key()))
    }
}

impl fmt::Debug for ResourceRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistration")
            .field("has_description", &self.description.is_some())
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Fluent builder assembling a [`ResourceRegistration`] tree.
#[derive(Default)]
pub struct ResourceRegistrationBuilder {
    description: Option<Arc<dyn DescriptionProvider>>,
    operations: IndexMap<String, OperationEntry>,
    attribute_access: HashMap<String, AccessKind>,
    children: IndexMap<PathElement, ResourceRegistrationBuilder>,
}

impl ResourceRegistrationBuilder {
    /// Sets the resource's own description document.
    pub fn description(mut self, document: Value) -> Self {
        self.description = Some(Arc::new(StaticDescription(document)));
        self
    }

    /// Sets a lazy description provider.
    pub fn description_provider(mut self, provider: Arc<dyn DescriptionProvider>) -> Self {
        self.description = Some(provider);
        self
    }

    /// Registers an operation described by `document`.
    pub fn operation(mut self, name: impl Into<String>, document: Value) -> Self {
        self.operations
            .insert(name.into(), OperationEntry::new(Arc::new(StaticDescription(document))));
        self
    }

    /// Registers an operation with a lazy description provider.
    pub fn operation_provider(mut self, name: impl Into<String>, provider: Arc<dyn DescriptionProvider>) -> Self {
        self.operations.insert(name.into(), OperationEntry::new(provider));
        self
    }

    /// Registers an operation contributed by an enclosing scope.
    pub fn inherited_operation(mut self, name: impl Into<String>, document: Value) -> Self {
        self.operations
            .insert(name.into(), OperationEntry::inherited(Arc::new(StaticDescription(document))));
        self
    }

    /// Records the access-control classification of an attribute.
    pub fn attribute_access(mut self, name: impl Into<String>, kind: AccessKind) -> Self {
        self.attribute_access.insert(name.into(), kind);
        self
    }

    /// Declares a child resource type.
    pub fn child(mut self, element: PathElement, child: ResourceRegistrationBuilder) -> Self {
        self.children.insert(element, child);
        self
    }

    /// Freezes the tree.
    pub fn build(self) -> ResourceRegistration {
        ResourceRegistration {
            description: self.description,
            operations: self.operations,
            attribute_access: self.attribute_access,
            children: self
                .children
                .into_iter()
                .map(|(element, child)| (element, child.build()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> ResourceRegistration {
        ResourceRegistration::builder()
            .description(json!({"description": "root"}))
            .child(
                PathElement::of("subsystem", "web"),
                ResourceRegistration::builder().description(json!({"description": "web"})),
            )
            .child(
                PathElement::wildcard("connector"),
                ResourceRegistration::builder().description(json!({"description": "any connector"})),
            )
            .child(
                PathElement::of("connector", "http"),
                ResourceRegistration::builder().description(json!({"description": "http connector"})),
            )
            .build()
    }

    fn described(node: &ResourceRegistration) -> Value {
        node.model_description().expect("description registered").model_description()
    }

    #[test]
    fn empty_address_resolves_to_self() {
        let tree = sample_tree();
        let resolved = tree.subregistration(&PathAddress::EMPTY).unwrap();
        assert_eq!(described(resolved)["description"], "root");
    }

    #[test]
    fn exact_child_wins_over_wildcard() {
        let tree = sample_tree();
        let address: PathAddress = vec![PathElement::of("connector", "http")].into();
        assert_eq!(described(tree.subregistration(&address).unwrap())["description"], "http connector");
    }

    #[test]
    fn named_element_falls_back_to_wildcard_child() {
        let tree = sample_tree();
        let address: PathAddress = vec![PathElement::of("connector", "ajp")].into();
        assert_eq!(described(tree.subregistration(&address).unwrap())["description"], "any connector");
    }

    #[test]
    fn wildcard_element_only_matches_wildcard_child() {
        let tree = sample_tree();
        let connector: PathAddress = vec![PathElement::wildcard("connector")].into();
        assert!(tree.subregistration(&connector).is_some());
        let subsystem: PathAddress = vec![PathElement::wildcard("subsystem")].into();
        assert!(tree.subregistration(&subsystem).is_none());
    }

    #[test]
    fn unknown_addresses_resolve_to_none() {
        let tree = sample_tree();
        let address: PathAddress = vec![PathElement::of("interface", "public")].into();
        assert!(tree.subregistration(&address).is_none());
    }

    #[test]
    fn inherited_entries_are_filtered_on_request() {
        let node = ResourceRegistration::builder()
            .operation("start", json!({}))
            .inherited_operation("read-resource", json!({}))
            .build();
        let own: Vec<&str> = node.operations(false).map(|(name, _)| name).collect();
        assert_eq!(own, vec!["start"]);
        let all: Vec<&str> = node.operations(true).map(|(name, _)| name).collect();
        assert_eq!(all, vec!["start", "read-resource"]);
    }

    #[test]
    fn closures_serve_as_description_providers() {
        let provider: Arc<dyn DescriptionProvider> = Arc::new(|| json!({"description": "computed"}));
        let node = ResourceRegistration::builder().description_provider(provider).build();
        assert_eq!(described(&node)["description"], "computed");
    }
}
