use crate::error::{Error, Result};
use crate::utils::determine_content_type;
use std::path::Path;

/// Size limits per media family, keyed by file extension
#[derive(Debug)]
pub struct FileTypeConfig {
    pub extensions: &'static [&'static str],
    pub size_limit: u64,
}

/// File types accepted by the API, with their upload size limits
pub const SUPPORTED_FILE_TYPES: &[FileTypeConfig] = &[
    FileTypeConfig {
        extensions: &["mp4", "mov"],
        size_limit: 262_144_000, // 250 MB
    },
    FileTypeConfig {
        extensions: &["jpg", "png", "jpeg", "gif", "webp"],
        size_limit: 52_428_800, // 50 MB
    },
    FileTypeConfig {
        extensions: &["flac", "wav", "mp3", "m4a", "aac", "alac", "ogg"],
        size_limit: 20_971_520, // 20 MB
    },
    FileTypeConfig {
        extensions: &["txt"],
        size_limit: 5_242_880, // 5 MB
    },
];

/// Name, content and MIME type of a file staged for upload
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Base name of the file
    pub name: String,

    /// Raw file content
    pub bytes: Vec<u8>,

    /// Content type derived from the extension
    pub mime_type: &'static str,
}

fn size_limit_for(extension: &str) -> Option<u64> {
    SUPPORTED_FILE_TYPES
        .iter()
        .find(|config| config.extensions.contains(&extension))
        .map(|config| config.size_limit)
}

/// Read a file from disk and validate it for upload.
///
/// Rejects with [`Error::InvalidFile`] when the path does not resolve to a
/// readable file, the extension is not a supported media type, or the file
/// exceeds the size limit for its media family.
pub async fn get_file_info(file_path: &str) -> Result<FileInfo> {
    let path = Path::new(file_path);
    if !path.is_file() {
        return Err(Error::InvalidFile(format!("File not found: {file_path}")));
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidFile(format!("Invalid file name: {file_path}")))?
        .to_string();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let size_limit = size_limit_for(&extension)
        .ok_or_else(|| Error::InvalidFile(format!("Unsupported file type: {name}")))?;

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > size_limit {
        return Err(Error::InvalidFile(format!(
            "File too large: {name} is {} bytes, limit is {size_limit}",
            metadata.len()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    if bytes.is_empty() {
        return Err(Error::InvalidFile(format!("File is empty: {file_path}")));
    }

    let mime_type = determine_content_type(path);

    Ok(FileInfo {
        name,
        bytes,
        mime_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_file_info_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.jpg");
        File::create(&path)
            .unwrap()
            .write_all(b"jpeg bytes")
            .unwrap();

        let info = get_file_info(path.to_str().unwrap()).await.unwrap();
        assert_eq!(info.name, "sample.jpg");
        assert_eq!(info.bytes, b"jpeg bytes");
        assert_eq!(info.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_get_file_info_missing_file() {
        let err = get_file_info("does/not/exist.png").await.unwrap_err();
        assert_eq!(err.code(), "invalid_file");
    }

    #[tokio::test]
    async fn test_get_file_info_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payload.exe");
        File::create(&path).unwrap().write_all(b"bytes").unwrap();

        let err = get_file_info(path.to_str().unwrap()).await.unwrap_err();
        assert_eq!(err.code(), "invalid_file");
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_get_file_info_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        File::create(&path).unwrap();

        let err = get_file_info(path.to_str().unwrap()).await.unwrap_err();
        assert_eq!(err.code(), "invalid_file");
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn test_get_file_info_over_size_limit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.txt");
        let file = File::create(&path).unwrap();
        // txt limit is 5 MB; set the length without writing the bytes
        file.set_len(5_242_881).unwrap();

        let err = get_file_info(path.to_str().unwrap()).await.unwrap_err();
        assert_eq!(err.code(), "invalid_file");
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_size_limit_lookup() {
        assert_eq!(size_limit_for("mp4"), Some(262_144_000));
        assert_eq!(size_limit_for("png"), Some(52_428_800));
        assert_eq!(size_limit_for("ogg"), Some(20_971_520));
        assert_eq!(size_limit_for("exe"), None);
    }
}
