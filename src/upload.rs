use crate::error::{Error, Result};
use crate::file::get_file_info;
use crate::http::{api_paths, HttpClient};
use crate::models::{SignedUrlRequest, SocialLinkRequest, UploadResponse, UploadResult};
use crate::utils::validate_social_link;
use log::debug;

/// Wrap non-domain failures (transport, IO, JSON) as `upload_failed`,
/// keeping the original message. Errors that already carry a domain kind
/// pass through untouched.
fn wrap_upload_error(context: &str, error: Error) -> Error {
    if error.is_domain() {
        error
    } else {
        Error::UploadFailed(format!("{context}: {error}"))
    }
}

fn require_request_id(response: &UploadResponse) -> Result<String> {
    match response.request_id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(Error::ServerError(
            "Invalid response from API - missing requestId".to_string(),
        )),
    }
}

/// Upload a file for analysis.
///
/// Registers the upload with a POST carrying the file's name, then PUTs the
/// bytes to the signed URL the registration returned. The two steps are
/// separate on purpose: the initiating POST only reserves the request and
/// hands back an address for the payload.
pub(crate) async fn upload_file(http: &HttpClient, file_path: &str) -> Result<UploadResult> {
    http.ensure_session().await?;

    let info = get_file_info(file_path)
        .await
        .map_err(|e| wrap_upload_error("File upload failed", e))?;
    debug!("registering upload for {}", info.name);

    let response: UploadResponse = http
        .post(
            api_paths::SIGNED_URL,
            &SignedUrlRequest {
                file_name: info.name.clone(),
            },
        )
        .await
        .map_err(|e| wrap_upload_error("File upload failed", e))?;

    let request_id = require_request_id(&response)?;

    if let Some(signed_url) = response
        .response
        .as_ref()
        .and_then(|details| details.signed_url.as_deref())
    {
        http.put_signed(signed_url, info.bytes, info.mime_type)
            .await
            .map_err(|e| wrap_upload_error("File upload failed", e))?;
    }

    Ok(UploadResult {
        request_id,
        media_id: response.media_id,
    })
}

/// Submit a social media link for analysis.
///
/// `media_id` is always `None` for social links; the API only hands back a
/// request ID.
pub(crate) async fn upload_social_link(http: &HttpClient, link: &str) -> Result<UploadResult> {
    http.ensure_session().await?;
    validate_social_link(link)?;
    debug!("submitting social media link");

    let response: UploadResponse = http
        .post(
            api_paths::SOCIAL_MEDIA,
            &SocialLinkRequest {
                social_link: link.to_string(),
            },
        )
        .await
        .map_err(|e| wrap_upload_error("Social media link upload failed", e))?;

    let request_id = require_request_id(&response)?;

    Ok(UploadResult {
        request_id,
        media_id: None,
    })
}
