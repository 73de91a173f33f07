//! `${VAR}` expansion in configuration values.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Applied to `site.output_dir`, `plugins.router` and `plugins.vcs` before
/// relative paths are resolved; `site.index_filenames` is taken literally.
/// An unset variable without a default is an error naming `field`. Values
/// without `${` are returned as-is, so a literal dollar sign needs no escaping
/// there.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| match std::env::var(name) {
        Ok(found) => Ok(Some(found)),
        Err(_) => Err(UnsetVar(name.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|err| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", err.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);
