//! Data-URI helpers for the binary payloads (audio notes, inventory photos,
//! schedule scans) exchanged with the store and the AI gateway.

use crate::errors::AppResult;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

pub fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("webm") => "audio/webm",
        Some("ogg") => "audio/ogg",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

/// Read a file and embed it as a `data:<mime>;base64,...` string.
pub fn to_data_uri(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        guess_mime(path),
        STANDARD.encode(bytes)
    ))
}

/// Strip the `data:...;base64,` header if present; the AI endpoint wants the
/// bare base64 payload.
pub fn strip_data_uri(data: &str) -> &str {
    match data.split_once(',') {
        Some((head, tail)) if head.starts_with("data:") => tail,
        _ => data,
    }
}

/// Base64 payload of a file, without the data-URI header.
pub fn to_base64(path: &Path) -> AppResult<String> {
    Ok(STANDARD.encode(fs::read(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_header_only_when_present() {
        assert_eq!(strip_data_uri("data:audio/webm;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_uri("QUJD"), "QUJD");
        // a bare payload containing a comma is left alone
        assert_eq!(strip_data_uri("not-a-uri,zzz"), "not-a-uri,zzz");
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(guess_mime(Path::new("plan.PDF")), "application/pdf");
        assert_eq!(guess_mime(Path::new("nota.webm")), "audio/webm");
        assert_eq!(guess_mime(Path::new("foto.jpeg")), "image/jpeg");
    }
}
