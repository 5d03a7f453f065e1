use url::Url;

/// The captured origin of a URL, `scheme://host`, lowercased host, no port.
pub fn origin_of(url: &Url) -> String {
    format!(
        "{}://{}",
        url.scheme(),
        url.host_str().unwrap_or("").to_lowercase()
    )
}

/// Replace every literal occurrence of the captured origin in `value` with
/// the base-URL placeholder.
///
/// This is plain substring replacement: a coincidental match inside
/// unrelated text is rewritten too. Kept as a single named operation so the
/// heuristic stays visible and testable on its own.
pub fn substitute_origin(value: &str, origin: &str, placeholder: &str) -> String {
    if origin.is_empty() || origin == "://" {
        return value.to_string();
    }
    value.replace(origin, placeholder)
}
