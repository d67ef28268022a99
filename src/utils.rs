use crate::error::{Error, Result};
use addr::parse_domain_name;
use std::path::Path;

// Determine the content type of a file based on its extension
pub(crate) fn determine_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("flac") => "audio/flac",
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        Some("alac") => "audio/alac",
        Some("ogg") => "audio/ogg",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Validate a social media link before submitting it to the API.
///
/// The API only accepts http(s) links with a named, registrable domain, so
/// obviously malformed links are rejected locally with an `upload_failed`
/// error instead of burning a round trip.
pub(crate) fn validate_social_link(link: &str) -> Result<()> {
    let parsed = url::Url::parse(link)
        .map_err(|_| Error::UploadFailed(format!("Invalid social media link: {link}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::UploadFailed(
                "Social media link must use http or https".to_string(),
            ))
        }
    }

    let host = parsed.host_str().unwrap_or("");
    if host.is_empty() || parse_domain_name(host).is_err() {
        return Err(Error::UploadFailed(
            "Social media link must have a valid domain".to_string(),
        ));
    }

    Ok(())
}
