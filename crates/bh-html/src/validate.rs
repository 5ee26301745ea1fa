use url::Url;

use crate::error::ConvertError;

/// Validate `candidate` as a link target.
///
/// Accept only absolute `http` or `https` urls with a non-empty host, and return the
/// normalized url: scheme and host lowercased, characters not allowed are percent-encoded.
///
/// The url parser silently repairs some broken input, such input is rejected before parsing:
///
/// * White spaces or control characters anywhere, including around the url.
/// * Missing `//` after scheme, like `http:www.google.com`.
/// * Backslash anywhere, it is read as `/`, like `http:\\evil.com`.
///
/// # Errors
///
/// [ConvertError::InvalidUrl] holding the `candidate`.
pub fn validate_url(candidate: &str) -> Result<String, ConvertError> {
    let invalid = || ConvertError::InvalidUrl(candidate.to_owned());

    if !is_strict_form(candidate) {
        return Err(invalid());
    }

    let url = Url::parse(candidate).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }

    Ok(serialize(candidate, &url))
}

/// Check `candidate` is in `scheme://...` form with no character the parser would drop or
/// rewrite.
fn is_strict_form(candidate: &str) -> bool {
    if candidate
        .chars()
        .any(|x| x.is_ascii_whitespace() || x.is_control() || x == '\\')
    {
        return false;
    }

    candidate
        .split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"))
}

/// The parser always serializes an empty path as `/`, strip it if `candidate` does not have
/// one so `http://a.com` stays `http://a.com`.
fn serialize(candidate: &str, url: &Url) -> String {
    let serialized = url.as_str();
    let bare_root = url.path() == "/" && url.query().is_none() && url.fragment().is_none();
    if bare_root && !candidate.ends_with('/') {
        serialized
            .strip_suffix('/')
            .unwrap_or(serialized)
            .to_owned()
    } else {
        serialized.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_http_and_https() {
        assert_eq!(
            validate_url("http://www.google.com").unwrap(),
            "http://www.google.com"
        );
        assert_eq!(
            validate_url("https://www.google.com/").unwrap(),
            "https://www.google.com/"
        );
        assert_eq!(
            validate_url("http://example.com/some.jpg").unwrap(),
            "http://example.com/some.jpg"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            validate_url("HTTP://WWW.Google.com/Logo.png").unwrap(),
            "http://www.google.com/Logo.png"
        );
        assert_eq!(
            validate_url("http://www.google.com/<foo>").unwrap(),
            "http://www.google.com/%3Cfoo%3E"
        );
        assert_eq!(
            validate_url("http://a.com?q=1").unwrap(),
            "http://a.com/?q=1"
        );
    }

    #[test]
    fn test_reject() {
        for candidate in [
            "www.google.com",
            "/relative/path",
            "ftp://www.google.com",
            "javascript:alert(1)",
            "mailto:someone@example.com",
            "http://",
            "",
            "http:www.google.com",
            "http:/www.google.com",
            "http:\\\\evil.com",
            "http://\\evil.com",
            "http://evil.com\\@good.com",
            "http://a.com/x\\y",
            " http://a.com",
            "http://a.com ",
            "http://goo\ngle.com",
            "http://a.com/\tx",
            "http://a.com/x\u{7f}",
            "http://a.com/\u{85}",
        ] {
            assert_eq!(
                validate_url(candidate),
                Err(ConvertError::InvalidUrl(candidate.to_owned())),
                "candidate {candidate:?}"
            );
        }
    }
}
