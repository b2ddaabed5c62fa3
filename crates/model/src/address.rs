//! Resource addresses: ordered `key=value` paths into the management tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `key=value` step of a resource address.
///
/// A value of `None` is the wildcard form (`key=*`): the element addresses a
/// whole child resource type rather than one named instance of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathElement {
    key: String,
    value: Option<String>,
}

impl PathElement {
    /// A fixed element addressing the named instance `value` under `key`.
    pub fn of(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A wildcard element addressing the child type `key` as a whole.
    pub fn wildcard(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Instance name, absent for wildcard elements.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_wildcard(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}=*", self.key),
        }
    }
}

/// Ordered sequence of path elements identifying a resource in the tree.
///
/// The empty address is the tree root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PathAddress(Vec<PathElement>);

impl PathAddress {
    /// The root address.
    pub const EMPTY: Self = Self(Vec::new());

    pub fn new(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &PathElement> + '_ {
        self.0.iter()
    }

    /// Returns a new address with `element` appended.
    pub fn append(&self, element: PathElement) -> Self {
        let mut elements = self.0.clone();
        elements.push(element);
        Self(elements)
    }
}

impl fmt::Display for PathAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for element in &self.0 {
            write!(f, "/{element}")?;
        }
        Ok(())
    }
}

impl FromIterator<PathElement> for PathAddress {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<PathElement>> for PathAddress {
    fn from(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_render_as_key_value_pairs() {
        assert_eq!(PathElement::of("subsystem", "web").to_string(), "subsystem=web");
        assert_eq!(PathElement::wildcard("connector").to_string(), "connector=*");
    }

    #[test]
    fn root_address_renders_as_slash() {
        assert_eq!(PathAddress::EMPTY.to_string(), "/");
        assert!(PathAddress::EMPTY.is_root());
        assert_eq!(PathAddress::EMPTY.size(), 0);
    }

    #[test]
    fn addresses_render_element_chain() {
        let address: PathAddress = vec![
            PathElement::of("subsystem", "web"),
            PathElement::of("connector", "http"),
        ]
        .into();
        assert_eq!(address.to_string(), "/subsystem=web/connector=http");
        assert!(!address.is_root());
        assert_eq!(address.size(), 2);
    }

    #[test]
    fn append_does_not_mutate_the_base_address() {
        let root = PathAddress::EMPTY;
        let child = root.append(PathElement::of("subsystem", "web"));
        assert!(root.is_root());
        assert_eq!(child.size(), 1);
    }
}
