//! Failures that cross the projection boundary.

use thiserror::Error;
use vantage_model::PathAddress;

/// Errors reported to callers of the projection.
///
/// Missing metadata never shows up here: absent description documents,
/// access-control entries, and reply properties are defaulted during
/// projection. Only an address with no registration behind it is an error.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// No resource registration exists at the requested address.
    #[error("no resource registered at address '{address}'")]
    ResourceNotFound { address: PathAddress },
}
