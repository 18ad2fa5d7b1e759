// ============================================================================
// URL HELPERS - Normalization and file-type icons for link items
// ============================================================================

const DOC_HOSTING_PATTERN: &str = "docs.google.com/document/d/";

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// `http://` or `https://`, any case
pub fn is_absolute(url: &str) -> bool {
    starts_with_ignore_case(url, "http://") || starts_with_ignore_case(url, "https://")
}

/// Makes a stored URL navigable where possible. Bare `www.` hosts get an
/// `https://` scheme, absolute URLs pass through, and anything else is
/// returned trimmed but otherwise untouched. Blank input becomes `#`.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return "#".to_string();
    }
    if is_absolute(url) {
        return url.to_string();
    }
    if starts_with_ignore_case(url, "www.") {
        return format!("https://{}", url);
    }
    url.to_string()
}

/// Font Awesome icon class for a link
pub fn file_icon(url: &str) -> &'static str {
    let normalized = normalize_url(url);
    if normalized.contains(DOC_HOSTING_PATTERN) {
        return "fa-file-pdf";
    }
    if is_absolute(&normalized) {
        return "fa-external-link-alt";
    }

    let ext = url.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "pdf" | "doc" | "docx" => "fa-file-pdf",
        "jpg" | "jpeg" | "png" | "gif" | "svg" => "fa-file-image",
        "zip" | "rar" | "7z" => "fa-file-archive",
        "html" | "htm" => "fa-file-code",
        _ => "fa-file",
    }
}

/// Part of an email before `@`, used as display name
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
