//! Serializes proxy options back into command-line arguments.
//!
//! Used to build the argument line of a spawned daemon process.

use serde_json::Value;

use super::ConfigError;
use super::options::{ProxyOptions, value_text};
use super::table::{EXTRA_PROXY_KEYS, lookup_proxy_option};

/// Returns the command-line text that reproduces `options`.
///
/// Entries follow the options' key order and are written as
/// `<flag> <value>` separated by single spaces. Private and derived keys are
/// skipped; null values are skipped too.
///
/// Values are not quoted, so a value containing whitespace splits into
/// several tokens when the line is split on spaces again.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOptionName`] for a key that has no flag and
/// is not a private or derived key.
pub fn stringify_proxy_options(options: &ProxyOptions) -> Result<String, ConfigError> {
    let mut args = Vec::with_capacity(options.len() * 2);

    for (name, value) in options.iter() {
        if EXTRA_PROXY_KEYS.contains(&name.as_str()) {
            continue;
        }

        let spec = lookup_proxy_option(name)
            .ok_or_else(|| ConfigError::InvalidOptionName(name.clone()))?;

        let Some(text) = value_text(value) else {
            continue;
        };

        args.push(spec.prefixed_flag());
        args.push(text);
    }

    Ok(args.join(" "))
}

/// Like [`stringify_proxy_options`] but for an untyped JSON value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidType`] if `value` is not an object, before
/// any entry is looked at.
pub fn stringify_value(value: Value) -> Result<String, ConfigError> {
    let options = ProxyOptions::try_from(value)?;
    stringify_proxy_options(&options)
}
