//! Candidate token resolution against the source page URL.

/// Resolves one extracted token against the page it came from.
///
/// Root-relative tokens get the page's origin; tokens already starting with
/// `http` pass through unchanged; everything else is joined under the page
/// URL (not RFC relative resolution: `c.mp4` under `https://x.com/page`
/// becomes `https://x.com/page/c.mp4`). A single trailing `/` on the base
/// is stripped before joining.
pub fn resolve_url(base: &str, token: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);

    if let Some(rooted) = token.strip_prefix('/') {
        if let Ok(parsed) = url::Url::parse(base) {
            let origin = parsed.origin().ascii_serialization();
            return format!("{}/{}", origin, rooted);
        }
        // Unparseable base: fall back to a plain join.
        return format!("{}/{}", base, rooted);
    }

    if token.starts_with("http") {
        return token.to_string();
    }

    format!("{}/{}", base, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_relative_token_uses_the_origin() {
        assert_eq!(
            resolve_url("https://x.com/page", "/a/b.mp4"),
            "https://x.com/a/b.mp4"
        );
    }

    #[test]
    fn origin_keeps_a_non_default_port() {
        assert_eq!(
            resolve_url("http://x.com:8080/page", "/v.mp4"),
            "http://x.com:8080/v.mp4"
        );
    }

    #[test]
    fn absolute_token_passes_through() {
        assert_eq!(
            resolve_url("https://x.com/page", "https://cdn.example.com/v.mp4"),
            "https://cdn.example.com/v.mp4"
        );
    }

    #[test]
    fn relative_token_joins_under_the_page() {
        assert_eq!(
            resolve_url("https://x.com/page", "c.mp4"),
            "https://x.com/page/c.mp4"
        );
    }

    #[test]
    fn trailing_slash_on_the_base_is_ignored() {
        assert_eq!(
            resolve_url("https://x.com/page/", "c.mp4"),
            "https://x.com/page/c.mp4"
        );
    }
}
