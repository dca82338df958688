//! SQL text utility functions

/// Join the non-empty fragments with `separator`.
///
/// `None` and empty fragments are dropped first; if nothing survives the
/// result is `None` rather than an empty string.
///
/// # Example
///
/// ```
/// use data_query::utils::sql::join_or_none;
///
/// let sql = join_or_none([Some("order by name asc"), None, Some("limit 10")], " ");
/// assert_eq!(sql.as_deref(), Some("order by name asc limit 10"));
/// assert_eq!(join_or_none([None::<&str>, Some("")], " "), None);
/// ```
pub fn join_or_none<I, S>(fragments: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let parts: Vec<S> = fragments
        .into_iter()
        .flatten()
        .filter(|s| !s.as_ref().is_empty())
        .collect();

    if parts.is_empty() {
        return None;
    }

    let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    Some(parts.join(separator))
}

/// Quote a string as a SQL literal, doubling embedded single quotes.
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
