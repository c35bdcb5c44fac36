//! Pull the decisive content-type out of collected response header lines.

/// Returns the value of the last `Content-Type` header seen.
///
/// With redirects followed, curl hands us the header block of every hop;
/// the final response is the one that decides playability.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                found = Some(value.trim().to_string());
            }
        }
    }
    found
}
