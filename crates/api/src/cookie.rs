//! Minimal `Set-Cookie` parsing.
//!
//! Only the leading `name=value` pair matters here; attributes such as
//! `Path`, `Max-Age`, or `HttpOnly` are the browser's business, and the
//! session-refresh protocol needs none of them.

/// A cookie extracted from one `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value, with surrounding double quotes stripped.
    pub value: String,
}

/// Parse a single `Set-Cookie` header value.
///
/// Returns `None` for headers without a `name=value` leading pair or
/// with an empty name.
#[must_use]
pub fn parse_set_cookie(header: &str) -> Option<SetCookie> {
    let first = header.split(';').next()?;
    let (name, value) = first.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let value = value.trim().trim_matches('"');
    Some(SetCookie {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

/// Find a cookie by name across several `Set-Cookie` headers.
///
/// The first match wins, mirroring how cookie jars treat duplicates.
pub fn find_cookie<'a, I>(headers: I, name: &str) -> Option<SetCookie>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .filter_map(parse_set_cookie)
        .find(|cookie| cookie.name == name)
}
