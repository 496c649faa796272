use crate::errors::{AppError, AppResult};

/// Find the single item whose id equals `prefix` or starts with it.
/// An exact match wins over prefix matches.
pub fn resolve_by_prefix<'a, T>(
    items: &'a [T],
    prefix: &str,
    id_of: impl Fn(&T) -> &str,
    not_found: impl FnOnce(String) -> AppError,
) -> AppResult<&'a T> {
    if let Some(exact) = items.iter().find(|it| id_of(it) == prefix) {
        return Ok(exact);
    }

    let mut matches = items.iter().filter(|it| id_of(it).starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(it), None) if !prefix.is_empty() => Ok(it),
        (Some(_), Some(_)) => Err(AppError::AmbiguousId(prefix.to_string())),
        _ => Err(not_found(prefix.to_string())),
    }
}
