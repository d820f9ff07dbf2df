use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::http::{ApiClient, HttpBackend, ReqwestBackend};
use crate::notify::Notifier;
use crate::services::{
    ArchiveService, AuthService, ClassroomService, ProfessorService, StudentService,
};
use crate::session::{AuthContext, SessionStore};
use crate::views::Actions;

/// 客户端运行所需的全部服务，共享同一个 API 客户端与会话
pub struct StartupContext {
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionStore>,
    pub auth: AuthService,
    pub classrooms: ClassroomService,
    pub professor: ProfessorService,
    pub student: StudentService,
    pub archives: ArchiveService,
}

impl StartupContext {
    /// 由任意 HTTP 后端组装
    pub fn with_backend(
        config: &AppConfig,
        backend: Arc<dyn HttpBackend>,
        session: Arc<SessionStore>,
    ) -> Self {
        let api = Arc::new(
            ApiClient::new(backend, session.clone()).with_base_url(&config.api.base_url),
        );

        Self {
            auth: AuthService::new(api.clone()),
            classrooms: ClassroomService::new(api.clone()),
            professor: ProfessorService::new(api.clone()),
            student: StudentService::new(api.clone()),
            archives: ArchiveService::new(api.clone(), config.upload.clone()),
            api,
            session,
        }
    }

    pub fn auth_context(&self) -> AuthContext {
        AuthContext::new(self.auth.clone())
    }

    pub fn actions(&self, notifier: Arc<dyn Notifier>) -> Actions {
        Actions::new(
            self.archives.clone(),
            self.classrooms.clone(),
            self.professor.clone(),
            self.student.clone(),
            notifier,
        )
    }
}

pub fn prepare_client_startup(config: &AppConfig) -> Result<StartupContext> {
    info!(
        "Preparing {} client for {}",
        config.app.system_name, config.api.base_url
    );

    if config.is_production() && !config.session.secure {
        warn!("Session cookie is not marked secure in production");
    }

    let backend = ReqwestBackend::new(&config.api)?;
    let session = Arc::new(SessionStore::from_config(&config.session));
    debug!(
        "Session store: {} ({})",
        config.session.store, config.session.path
    );

    Ok(StartupContext::with_backend(config, Arc::new(backend), session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::testing::MockBackend;

    #[tokio::test]
    async fn test_services_share_session() {
        let backend = MockBackend::new();
        backend.respond(Method::Get, "/professor/classrooms", 200, "[]");
        let context = StartupContext::with_backend(
            &AppConfig::default(),
            Arc::new(backend.clone()),
            Arc::new(SessionStore::in_memory()),
        );

        context.session.store_token("jwt").unwrap();
        assert!(context.professor.list_classrooms().await.unwrap().is_empty());
        assert_eq!(backend.calls()[0].bearer.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_prepare_with_memory_store() {
        let mut config = AppConfig::default();
        config.session.store = "memory".to_string();

        let context = prepare_client_startup(&config).unwrap();
        assert!(context.session.token().is_none());
    }
}
