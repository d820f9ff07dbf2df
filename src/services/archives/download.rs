use std::path::{Path, PathBuf};

use tracing::info;

use super::ArchiveService;
use crate::errors::{ClientError, Result};
use crate::models::files::Archive;

/// 只保留原始文件名的最后一段，避免写出目标目录
fn safe_file_name(archive: &Archive) -> String {
    Path::new(&archive.original_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("archive-{}", archive.id))
}

pub async fn download(
    service: &ArchiveService,
    archive: &Archive,
    dest_dir: &Path,
) -> Result<PathBuf> {
    if archive.download_url.is_empty() {
        return Err(ClientError::not_found(format!(
            "Archive {} has no download URL",
            archive.id
        )));
    }

    let bytes = service.api().download(&archive.download_url).await?;

    tokio::fs::create_dir_all(dest_dir).await?;
    let target = dest_dir.join(safe_file_name(archive));
    tokio::fs::write(&target, &bytes).await?;

    info!(
        "Downloaded archive {} ({} bytes) to {}",
        archive.id,
        bytes.len(),
        target.display()
    );
    Ok(target)
}
