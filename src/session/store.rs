use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::cookie::AuthCookie;
use crate::config::SessionConfig;
use crate::errors::{ClientError, Result};

/// cookie 的持久化位置
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<AuthCookie>>;
    fn save(&self, cookie: &AuthCookie) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// 进程内存储，进程退出即失效
#[derive(Default)]
pub struct MemoryTokenStore {
    cookie: Mutex<Option<AuthCookie>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<AuthCookie>> {
        let guard = self
            .cookie
            .lock()
            .map_err(|_| ClientError::session("Token store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, cookie: &AuthCookie) -> Result<()> {
        let mut guard = self
            .cookie
            .lock()
            .map_err(|_| ClientError::session("Token store lock poisoned"))?;
        *guard = Some(cookie.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .cookie
            .lock()
            .map_err(|_| ClientError::session("Token store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// JSON 文件存储，跨命令保持登录
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<AuthCookie>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(cookie) => Ok(Some(cookie)),
            Err(e) => {
                // 文件损坏时当作未登录
                warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    fn save(&self, cookie: &AuthCookie) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_vec_pretty(cookie)?)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// 根据配置创建 token 存储，未知类型回退到内存
pub fn create_token_store(config: &SessionConfig) -> Box<dyn TokenStore> {
    match config.store.as_str() {
        "file" => Box::new(FileTokenStore::new(&config.path)),
        "memory" => Box::new(MemoryTokenStore::new()),
        other => {
            warn!("Token store '{}' not supported, falling back to memory", other);
            Box::new(MemoryTokenStore::new())
        }
    }
}
