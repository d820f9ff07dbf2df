use std::path::Path;

use tracing::{error, info};

use super::ArchiveService;
use crate::errors::{ClientError, Result};
use crate::models::files::{Archive, UploadFile};
use crate::utils::check_upload;

pub async fn upload_file(service: &ArchiveService, file: UploadFile) -> Result<Archive> {
    let file_name = file.file_name.clone();
    let size = file.size();

    match service.api().upload::<Archive>("/archive/upload", file).await {
        Ok(archive) => {
            info!(
                "Uploaded {} ({} bytes) as archive {}",
                file_name, size, archive.id
            );
            Ok(archive)
        }
        Err(e) => {
            error!("Error uploading file {}: {}", file_name, e);
            Err(e)
        }
    }
}

pub async fn read_upload(service: &ArchiveService, path: &Path) -> Result<UploadFile> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ClientError::file_operation(format!("Invalid file path: {}", path.display()))
        })?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ClientError::file_operation(format!("Failed to read {}: {e}", path.display()))
    })?;

    check_upload(service.upload_config(), &file_name, &bytes)?;
    Ok(UploadFile::new(file_name, bytes))
}

pub async fn upload_path(service: &ArchiveService, path: &Path) -> Result<Archive> {
    let file = read_upload(service, path).await?;
    upload_file(service, file).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::UploadConfig;
    use crate::http::{Method, RequestBody};
    use crate::testing::{MockBackend, sample_archive, test_client};

    fn service(backend: &MockBackend) -> ArchiveService {
        ArchiveService::new(Arc::new(test_client(backend)), UploadConfig::default())
    }

    #[tokio::test]
    async fn test_upload_path_sends_multipart() {
        let backend = MockBackend::new();
        backend.respond_json(Method::Post, "/archive/upload", &sample_archive(31, "notas.pdf"));

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notas.pdf");
        std::fs::write(&path, b"%PDF-1.7 conteudo").unwrap();

        let archive = service(&backend).upload_path(&path).await.unwrap();
        assert_eq!(archive.id, 31);

        let calls = backend.calls();
        match &calls[0].body {
            RequestBody::Multipart(file) => {
                assert_eq!(file.file_name, "notas.pdf");
                assert_eq!(file.content_type, "application/pdf");
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_upload_rejects_before_request() {
        let backend = MockBackend::new();
        let dir = tempfile::tempdir().expect("tempdir");

        // 扩展名与内容不符
        let path = dir.path().join("foto.png");
        std::fs::write(&path, b"not really a png").unwrap();
        let err = service(&backend).read_upload(&path).await.unwrap_err();
        assert_eq!(err.code(), "C006");

        let missing = dir.path().join("nada.pdf");
        let err = service(&backend).read_upload(&missing).await.unwrap_err();
        assert_eq!(err.code(), "C008");

        assert!(backend.calls().is_empty());
    }
}
