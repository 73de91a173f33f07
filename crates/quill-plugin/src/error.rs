//! Registry and contract errors.

/// Registry lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PluginError {
    /// No component was registered under the identifier for this kind.
    #[error("No {kind} registered under identifier `{identifier}`")]
    NotFound {
        /// Capability kind (e.g. "router").
        kind: &'static str,
        /// Requested identifier.
        identifier: String,
    },
}

/// A component was asked to perform an operation it does not override.
///
/// Component traits provide default method bodies that return this error, so a
/// partial component (e.g. a read-only VCS adapter) loads fine and only fails
/// when the missing operation is actually invoked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{component} does not override `{operation}`, which every {kind} implementation must provide"
)]
pub struct ContractError {
    /// Capability kind the operation belongs to.
    pub kind: &'static str,
    /// Type name of the offending component.
    pub component: &'static str,
    /// Name of the missing operation.
    pub operation: &'static str,
}

impl ContractError {
    /// Create an error for `operation` missing from component type `T`.
    #[must_use]
    pub fn new<T: ?Sized>(kind: &'static str, operation: &'static str) -> Self {
        Self {
            kind,
            component: std::any::type_name::<T>(),
            operation,
        }
    }
}
