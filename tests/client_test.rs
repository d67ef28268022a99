use serde_json::json;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;
use veridetect::{Client, Config, Error, UploadOptions};

fn client_for(server: &mockito::Server) -> Client {
    Client::new(Config {
        api_key: "test_api_key".to_string(),
        base_url: Some(server.url()),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_upload_file_flow() {
    let mut server = mockito::Server::new_async().await;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.jpg");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"test image data").unwrap();

    // Registration returns a signed URL for the payload
    let register = server
        .mock("POST", "/api/files/aws-presigned")
        .with_status(200)
        .with_header("content-type", "application/json")
        .match_header("X-API-KEY", "test_api_key")
        .match_body(mockito::Matcher::Json(json!({ "fileName": "test.jpg" })))
        .with_body(
            json!({
                "requestId": "test-request-id",
                "mediaId": "test-media-id",
                "response": { "signedUrl": format!("{}/upload", server.url()) }
            })
            .to_string(),
        )
        .create_async()
        .await;

    // Payload goes to the signed URL, without the API key header
    let put_bytes = server
        .mock("PUT", "/upload")
        .match_header("content-type", "image/jpeg")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let upload_result = client
        .upload(UploadOptions {
            file_path: file_path.to_str().unwrap().to_string(),
        })
        .await
        .unwrap();

    assert_eq!(upload_result.request_id, "test-request-id");
    assert_eq!(upload_result.media_id.as_deref(), Some("test-media-id"));

    register.assert_async().await;
    put_bytes.assert_async().await;
}

#[tokio::test]
async fn test_upload_without_signed_url_skips_put() {
    let mut server = mockito::Server::new_async().await;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.png");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"png data").unwrap();

    let register = server
        .mock("POST", "/api/files/aws-presigned")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "requestId": "req-no-url" }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let upload_result = client
        .upload(UploadOptions {
            file_path: file_path.to_str().unwrap().to_string(),
        })
        .await
        .unwrap();

    assert_eq!(upload_result.request_id, "req-no-url");
    assert_eq!(upload_result.media_id, None);

    register.assert_async().await;
}

#[tokio::test]
async fn test_upload_missing_request_id() {
    let mut server = mockito::Server::new_async().await;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.jpg");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"test image data").unwrap();

    let register = server
        .mock("POST", "/api/files/aws-presigned")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .upload(UploadOptions {
            file_path: file_path.to_str().unwrap().to_string(),
        })
        .await
        .unwrap_err();

    match err {
        Error::ServerError(msg) => assert!(msg.contains("missing requestId")),
        other => panic!("Expected ServerError, got {other:?}"),
    }

    register.assert_async().await;
}

#[tokio::test]
async fn test_upload_signed_url_rejection() {
    let mut server = mockito::Server::new_async().await;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.jpg");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"test image data").unwrap();

    let _register = server
        .mock("POST", "/api/files/aws-presigned")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "requestId": "test-request-id",
                "mediaId": "test-media-id",
                "response": { "signedUrl": format!("{}/upload-fail", server.url()) }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let _put_bytes = server
        .mock("PUT", "/upload-fail")
        .with_status(400)
        .with_body("Upload rejected")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .upload(UploadOptions {
            file_path: file_path.to_str().unwrap().to_string(),
        })
        .await
        .unwrap_err();

    match err {
        Error::UploadFailed(msg) => assert!(msg.contains("Signed URL upload failed")),
        other => panic!("Expected UploadFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_with_invalid_file() {
    let client = Client::new(Config {
        api_key: "test_api_key".to_string(),
        ..Default::default()
    })
    .unwrap();

    let result = client
        .upload(UploadOptions {
            file_path: "non_existent_file.jpg".to_string(),
        })
        .await;

    match result.unwrap_err() {
        Error::InvalidFile(_) => {}
        err => panic!("Unexpected error: {err:?}"),
    }
}

#[tokio::test]
async fn test_api_error_mapping() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server);

    let _unauthorized = server
        .mock("GET", "/api/media/users/test-unauthorized")
        .with_status(401)
        .with_body(r#"{"error": "Unauthorized access"}"#)
        .create_async()
        .await;
    match client.get_result("test-unauthorized", None).await {
        Err(Error::Unauthorized(_)) => {}
        other => panic!("Expected Unauthorized, got {other:?}"),
    }

    let _forbidden = server
        .mock("GET", "/api/media/users/test-forbidden")
        .with_status(403)
        .with_body(r#"{"error": "Forbidden"}"#)
        .create_async()
        .await;
    match client.get_result("test-forbidden", None).await {
        Err(Error::Unauthorized(_)) => {}
        other => panic!("Expected Unauthorized, got {other:?}"),
    }

    let _not_found = server
        .mock("GET", "/api/media/users/test-missing")
        .with_status(404)
        .with_body(r#"{"error": "Resource not found"}"#)
        .create_async()
        .await;
    match client.get_result("test-missing", None).await {
        Err(Error::NotFound(_)) => {}
        other => panic!("Expected NotFound, got {other:?}"),
    }

    let _server_error = server
        .mock("GET", "/api/media/users/test-server-error")
        .with_status(500)
        .with_body(r#"{"error": "Internal server error"}"#)
        .create_async()
        .await;
    match client.get_result("test-server-error", None).await {
        Err(Error::ServerError(_)) => {}
        other => panic!("Expected ServerError, got {other:?}"),
    }

    let _bad_request = server
        .mock("GET", "/api/media/users/test-bad-request")
        .with_status(400)
        .with_body(r#"{"error": "Custom error message"}"#)
        .create_async()
        .await;
    match client.get_result("test-bad-request", None).await {
        Err(Error::ServerError(msg)) => assert_eq!(msg, "Custom error message"),
        other => panic!("Expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_detect_file() {
    let mut server = mockito::Server::new_async().await;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.jpg");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"test image data").unwrap();

    let register = server
        .mock("POST", "/api/files/aws-presigned")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "requestId": "test-request-id",
                "mediaId": "test-media-id",
                "response": { "signedUrl": format!("{}/upload", server.url()) }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let put_bytes = server
        .mock("PUT", "/upload")
        .with_status(200)
        .create_async()
        .await;

    let result_fetch = server
        .mock("GET", "/api/media/users/test-request-id")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "resultsSummary": {
                    "status": "AUTHENTIC",
                    "metadata": { "finalScore": 12.0 }
                },
                "models": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.detect_file(file_path.to_str().unwrap()).await.unwrap();

    assert_eq!(result.status, "AUTHENTIC");
    assert_eq!(result.score, Some(0.12));

    register.assert_async().await;
    put_bytes.assert_async().await;
    result_fetch.assert_async().await;
}
