pub mod download;
pub mod upload;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::UploadConfig;
use crate::errors::Result;
use crate::http::ApiClient;
use crate::models::files::{Archive, UploadFile};

/// 附件上传与下载（/archive/...）
#[derive(Clone)]
pub struct ArchiveService {
    api: Arc<ApiClient>,
    upload_config: UploadConfig,
}

impl ArchiveService {
    pub fn new(api: Arc<ApiClient>, upload_config: UploadConfig) -> Self {
        Self { api, upload_config }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    pub(crate) fn upload_config(&self) -> &UploadConfig {
        &self.upload_config
    }

    // 上传一个文件，返回服务端的附件记录
    pub async fn upload_file(&self, file: UploadFile) -> Result<Archive> {
        upload::upload_file(self, file).await
    }

    // 读取本地文件并做上传前检查
    pub async fn read_upload(&self, path: &Path) -> Result<UploadFile> {
        upload::read_upload(self, path).await
    }

    // 读取本地文件、检查后上传
    pub async fn upload_path(&self, path: &Path) -> Result<Archive> {
        upload::upload_path(self, path).await
    }

    // 下载附件到目录，返回写入的文件路径
    pub async fn download(&self, archive: &Archive, dest_dir: &Path) -> Result<PathBuf> {
        download::download(self, archive, dest_dir).await
    }
}
