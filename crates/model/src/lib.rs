//! Input boundary of the projection: resource addresses, generic description
//! documents, and the read-only registration tree.
//!
//! Nothing in this crate executes operations or mutates the tree after it is
//! built; the projection engine reads an immutable snapshot assembled through
//! [`ResourceRegistrationBuilder`].

pub mod access;
pub mod address;
pub mod document;
pub mod keys;
pub mod registration;

pub use access::AccessKind;
pub use address::{PathAddress, PathElement};
pub use document::{DocumentError, ModelKind, UnknownKindError, has_defined, parse_document};
pub use registration::{
    DescriptionProvider, OperationEntry, ResourceRegistration, ResourceRegistrationBuilder,
    StaticDescription,
};
