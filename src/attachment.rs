use anyhow::{anyhow, bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Largest accepted attachment, in bytes (1 MB inclusive).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub data_url: String,
}

impl Attachment {
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read attachment {}", path.display()))?;
        if !metadata.is_file() {
            bail!("{} is not a file", path.display());
        }
        if metadata.len() > MAX_FILE_SIZE {
            bail!("File size must not exceed 1 MB");
        }

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read attachment {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("Attachment path has no file name"))?;

        Self::from_bytes(&file_name, &bytes)
    }

    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.len() as u64 > MAX_FILE_SIZE {
            bail!("File size must not exceed 1 MB");
        }

        let mime_type = guess_mime_type(file_name).to_string();
        let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes));

        Ok(Attachment {
            file_name: file_name.to_string(),
            mime_type,
            data_url,
        })
    }
}

/// Splits a `data:<mime>;base64,<payload>` URL into its MIME type and bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("Not a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("Malformed data URL"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| anyhow!("Only base64 data URLs are supported"))?;

    let bytes = STANDARD
        .decode(payload)
        .context("Invalid base64 payload in data URL")?;
    Ok((mime.to_string(), bytes))
}

fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}
