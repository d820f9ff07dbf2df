//! 上传前的本地文件检查
//!
//! 服务端同样会校验，这里只是为了在发起请求前尽早给出提示。

use std::path::Path;

use crate::config::UploadConfig;
use crate::errors::{ClientError, Result};

/// 取小写扩展名（包含点号，如 ".pdf"），没有扩展名时返回空串
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// 根据文件名推断 multipart 使用的 MIME 类型
pub fn mime_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).as_str() {
        ".pdf" => "application/pdf",
        ".doc" => "application/msword",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".xls" => "application/vnd.ms-excel",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".ppt" => "application/vnd.ms-powerpoint",
        ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".txt" => "text/plain",
        ".md" => "text/markdown",
        ".csv" => "text/csv",
        ".json" => "application/json",
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".zip" => "application/zip",
        ".rar" => "application/vnd.rar",
        ".7z" => "application/x-7z-compressed",
        ".gz" | ".gzip" => "application/gzip",
        _ => "application/octet-stream",
    }
}

/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".png"）
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    let extension = extension.to_lowercase();

    // 文本格式不检查，空文件也允许
    if matches!(extension.as_str(), ".txt" | ".md" | ".json" | ".csv") {
        return true;
    }

    if data.is_empty() {
        return false;
    }

    match extension.as_str() {
        // 图片格式
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",

        // 文档格式
        ".pdf" => data.starts_with(b"%PDF"),
        ".doc" | ".xls" | ".ppt" => {
            data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        }
        // OOXML 和 zip 都是 zip 容器
        ".docx" | ".xlsx" | ".pptx" | ".zip" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),

        // 压缩格式
        ".rar" => data.starts_with(b"Rar!"),
        ".7z" => data.starts_with(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
        ".gz" | ".gzip" => data.starts_with(&[0x1F, 0x8B]),

        _ => false,
    }
}

/// 按上传配置检查一个待上传文件：扩展名白名单、大小、内容
pub fn check_upload(config: &UploadConfig, file_name: &str, data: &[u8]) -> Result<()> {
    let extension = extension_of(file_name);

    if !config
        .allowed_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&extension))
    {
        return Err(ClientError::validation(format!(
            "Tipo de arquivo não permitido: {file_name}"
        )));
    }

    if data.len() > config.max_size {
        return Err(ClientError::validation(format!(
            "Arquivo muito grande: {file_name} ({} bytes, máximo {})",
            data.len(),
            config.max_size
        )));
    }

    if !validate_magic_bytes(data, &extension) {
        return Err(ClientError::validation(format!(
            "O conteúdo de {file_name} não corresponde à extensão"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png_header, ".png"));
        assert!(validate_magic_bytes(&png_header, ".PNG"));
        assert!(!validate_magic_bytes(&png_header, ".jpg"));
    }

    #[test]
    fn test_pdf_magic() {
        let pdf_header = b"%PDF-1.4";
        assert!(validate_magic_bytes(pdf_header, ".pdf"));
        assert!(!validate_magic_bytes(pdf_header, ".docx"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".pdf"));
        assert!(!validate_magic_bytes(&[], ".png"));
        assert!(validate_magic_bytes(&[], ".txt"));
        assert!(validate_magic_bytes(&[], ".CSV"));
    }

    #[test]
    fn test_empty_text_upload_allowed() {
        let config = UploadConfig::default();
        assert!(check_upload(&config, "vazio.txt", b"").is_ok());
        assert!(check_upload(&config, "vazio.pdf", b"").is_err());
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for("Relatorio.PDF"), "application/pdf");
        assert_eq!(mime_type_for("foto.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for("sem_extensao"), "application/octet-stream");
    }

    #[test]
    fn test_check_upload() {
        let config = UploadConfig::default();
        assert!(check_upload(&config, "notas.txt", b"ola").is_ok());

        let err = check_upload(&config, "virus.exe", b"MZ").unwrap_err();
        assert_eq!(err.code(), "C006");

        let err = check_upload(&config, "falso.pdf", b"not a pdf").unwrap_err();
        assert!(err.message().contains("falso.pdf"));

        let small = UploadConfig {
            max_size: 4,
            ..UploadConfig::default()
        };
        assert!(check_upload(&small, "notas.txt", b"12345").is_err());
    }
}
