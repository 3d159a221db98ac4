//! Helpers shared by the sections to build and check parameters.

use mwsign_core::time::{format_iso8601, DateTime};
use mwsign_core::{Error, RequestParameters, Result};
use std::fmt::Display;

/// Expand `values` into `prefix.1`, `prefix.2`, ... entries.
///
/// Every value must be non-empty.
///
/// ```
/// use mwsign_mws::params::indexed_params;
///
/// let params = indexed_params("FeedSubmissionIdList.Id", ["1", "2"]).unwrap();
/// assert_eq!(
///     params.expanded().collect::<Vec<_>>(),
///     vec![
///         ("FeedSubmissionIdList.Id.1", "1"),
///         ("FeedSubmissionIdList.Id.2", "2"),
///     ]
/// );
/// ```
pub fn indexed_params<I, S>(prefix: &str, values: I) -> Result<RequestParameters>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = RequestParameters::new();
    for (i, v) in values.into_iter().enumerate() {
        let v = v.as_ref();
        if v.is_empty() {
            return Err(Error::validation(format!(
                "{prefix}.{} must not be empty",
                i + 1
            )));
        }
        params.push(format!("{prefix}.{}", i + 1), v);
    }
    Ok(params)
}

/// Derive the list key used by the Orders API for `name`.
///
/// The last capitalized word of `name` is repeated after a dot:
/// `MarketplaceId` becomes `MarketplaceId.Id` and `OrderStatus` becomes
/// `OrderStatus.Status`.
pub fn list_key(name: &str) -> String {
    let start = name
        .char_indices()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0);
    format!("{name}.{}", &name[start..])
}

/// Fail if `value` is empty.
pub fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Fail if `value` is outside `min..=max`.
pub fn require_range<T: PartialOrd + Display>(name: &str, value: T, min: T, max: T) -> Result<()> {
    if value < min || value > max {
        return Err(Error::validation(format!(
            "{name} is {value}, must be between {min} and {max} inclusive"
        )));
    }
    Ok(())
}

/// Format a date parameter.
pub fn date_param(t: DateTime) -> String {
    format_iso8601(t)
}
