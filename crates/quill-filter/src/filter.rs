//! Filter contract.

use quill_plugin::{Capability, ContractError};

use crate::params::FilterParams;

/// Filter error.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The filter does not implement `run`.
    #[error(transparent)]
    NotImplemented(#[from] ContractError),
    /// A parameter the filter needs was not given.
    #[error("Missing required filter parameter `{name}`")]
    MissingParam {
        /// Parameter name.
        name: String,
    },
    /// Error from the underlying transformation.
    #[error("Filter failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Transforms content.
///
/// `run` has a default body that fails with [`FilterError::NotImplemented`].
pub trait Filter: Send + Sync {
    /// Filter `content` with the given parameters and return the result.
    fn run(&self, _content: &str, _params: &FilterParams) -> Result<String, FilterError> {
        Err(FilterError::NotImplemented(ContractError::new::<Self>(
            <dyn Filter as Capability>::KIND,
            "run",
        )))
    }
}

impl Capability for dyn Filter {
    const KIND: &'static str = "filter";
    type Context = ();
}

/// Filter that overrides nothing; `run` always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseFilter;

impl Filter for BaseFilter {}
