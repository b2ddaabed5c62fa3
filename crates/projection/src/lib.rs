//! Projection of a management resource's description into a typed external
//! interface description.
//!
//! The engine is a pure, single-pass read over an immutable registration
//! snapshot: attribute and operation metadata are converted into typed
//! descriptors, lifecycle and root-global operations are filtered, and "add
//! child" operations are synthesized from the declared child types. Missing
//! metadata is defaulted rather than propagated; the only failure a caller
//! sees is a resource address with no registration behind it.

pub mod child_add;
pub mod convert;
pub mod error;
pub mod factory;
pub mod name;

pub use child_add::{ChildAddOperation, find_add_child_operations};
pub use convert::convert_to_interface_type;
pub use error::ProjectionError;
pub use factory::{ROOT_EXCLUDED_OPERATIONS, interface_description};
pub use name::{add_operation_name, convert_to_camel_case};
