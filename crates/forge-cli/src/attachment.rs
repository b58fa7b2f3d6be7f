//! Reference image loading for `generate --image`

use std::path::Path;

use anyhow::{bail, Context, Result};
use app_forge::Attachment;
use base64::Engine;

/// Largest accepted image; Gemini rejects inline requests above 20 MB
/// and base64 grows the payload by a third.
pub const MAX_ATTACHMENT_BYTES: usize = 14 * 1024 * 1024;

/// MIME type from a file extension, for the formats vision models accept
pub fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime)
}

/// Read a file and encode it as an inline attachment
pub async fn load(path: &Path, mime_override: Option<&str>) -> Result<Attachment> {
    let mime_type = match mime_override {
        Some(mime) if mime.trim().is_empty() => bail!("--mime must not be empty"),
        Some(mime) => mime.trim().to_string(),
        None => guess_mime_type(path)
            .with_context(|| format!("Cannot infer MIME type of {:?}; pass --mime", path))?
            .to_string(),
    };

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {:?}", path))?;

    if bytes.is_empty() {
        bail!("Image {:?} is empty", path);
    }
    if bytes.len() > MAX_ATTACHMENT_BYTES {
        bail!(
            "Image too large: {} bytes (max {} bytes)",
            bytes.len(),
            MAX_ATTACHMENT_BYTES
        );
    }

    log::debug!("Attaching {:?} ({} bytes, {})", path, bytes.len(), mime_type);

    let data = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(Attachment::new(data, mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("sketch.PNG")), Some("image/png"));
        assert_eq!(guess_mime_type(Path::new("a/b/photo.jpeg")), Some("image/jpeg"));
        assert_eq!(guess_mime_type(Path::new("notes.txt")), None);
        assert_eq!(guess_mime_type(Path::new("no_extension")), None);
    }

    #[tokio::test]
    async fn test_load_encodes_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        std::fs::write(&path, b"hi").unwrap();

        let attachment = load(&path, None).await.unwrap();
        assert_eq!(attachment.data, "aGk=");
        assert_eq!(attachment.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_mime_override_and_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.bin");
        std::fs::write(&path, b"hi").unwrap();

        assert!(load(&path, None).await.is_err());
        let attachment = load(&path, Some("image/webp")).await.unwrap();
        assert_eq!(attachment.mime_type, "image/webp");
    }

    #[tokio::test]
    async fn test_empty_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        let err = load(&path, None).await.unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[tokio::test]
    async fn test_empty_mime_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.png");
        std::fs::write(&path, b"hi").unwrap();

        assert!(load(&path, Some("")).await.is_err());
        assert!(load(&path, Some("   ")).await.is_err());
    }
}
