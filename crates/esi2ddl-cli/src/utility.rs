/// Redact the password portion of a database URL for safe display.
///
/// If the URL can be parsed and contains a password, replaces it with `***`.
/// A leading `jdbc:` is kept. Unparsable input is returned unchanged.
pub(crate) fn redact_url_password(url: &str) -> String {
    let (prefix, rest) = match url.strip_prefix("jdbc:") {
        Some(rest) => ("jdbc:", rest),
        None => ("", url),
    };

    match url::Url::parse(rest) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            format!("{prefix}{parsed}")
        }
        Err(_) => url.to_string(),
    }
}
