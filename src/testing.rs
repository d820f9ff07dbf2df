//! 测试辅助：脚本化的 HTTP 后端与样例数据

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::errors::{ClientError, Result};
use crate::http::{ApiClient, ApiRequest, HttpBackend, Method, RawResponse};
use crate::models::classes::entities::Classroom;
use crate::models::files::entities::Archive;
use crate::models::homeworks::entities::Homework;
use crate::models::posts::entities::Post;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::users::entities::{User, UserRole};
use crate::session::SessionStore;

type Scripted = std::result::Result<RawResponse, ClientError>;

#[derive(Default)]
struct MockState {
    responses: HashMap<(Method, String), VecDeque<Scripted>>,
    calls: Vec<ApiRequest>,
}

/// 按 (method, path) 返回预设响应，并记录所有请求
///
/// 同一路径排队多个响应时依次弹出，最后一个会一直保留；
/// 未预设的路径返回 404。
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted, replace: bool) {
        let mut state = self.state.lock().unwrap();
        let queue = state
            .responses
            .entry((method, path.to_string()))
            .or_default();
        if replace {
            queue.clear();
        }
        queue.push_back(scripted);
    }

    fn raw(status: u16, body: &str) -> Scripted {
        Ok(RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        })
    }

    /// 替换该路径已有的响应
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Self::raw(status, body), true);
    }

    /// 追加到该路径的响应队列
    pub fn enqueue(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Self::raw(status, body), false);
    }

    pub fn respond_json(&self, method: Method, path: &str, value: &impl serde::Serialize) {
        let body = serde_json::to_string(value).unwrap();
        self.respond(method, path, 200, &body);
    }

    /// 模拟网络层失败
    pub fn fail(&self, method: Method, path: &str) {
        self.push(
            method,
            path,
            Err(ClientError::network("connection refused")),
            true,
        );
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.path).collect()
    }
}

#[async_trait]
impl HttpBackend for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        let key = (request.method, request.path.clone());
        state.calls.push(request);

        let scripted = match state.responses.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        scripted.unwrap_or_else(|| {
            Ok(RawResponse {
                status: 404,
                body: Vec::new(),
            })
        })
    }
}

/// 使用内存会话的客户端
pub fn test_client(backend: &MockBackend) -> ApiClient {
    ApiClient::new(
        Arc::new(backend.clone()),
        Arc::new(SessionStore::in_memory()),
    )
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
}

pub fn sample_user(id: i64, name: &str, role: UserRole) -> User {
    User {
        id,
        email: format!("user{id}@escola.br"),
        name: name.to_string(),
        created_at: fixed_time(),
        profile: role,
    }
}

pub fn sample_archive(id: i64, name: &str) -> Archive {
    Archive {
        id,
        original_name: name.to_string(),
        stored_name: format!("{id}-{name}"),
        content_type: "application/pdf".to_string(),
        size_in_bytes: 2048,
        uploaded_at: fixed_time(),
        download_url: format!("/archive/{id}/download"),
    }
}

pub fn sample_classroom(id: i64, name: &str, users: Vec<User>) -> Classroom {
    Classroom {
        id,
        name: name.to_string(),
        description: format!("Turma de {name}"),
        created_at: fixed_time(),
        updated_at: fixed_time(),
        users,
        banner: None,
        avatar: None,
        invite_code: "ABC123".to_string(),
    }
}

pub fn sample_post(id: i64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: "Conteúdo".to_string(),
        created_at: fixed_time(),
        is_fixed: false,
        user: sample_user(2, "Carlos Lima", UserRole::Professor),
        classroom: None,
        archives: Vec::new(),
    }
}

pub fn sample_homework(id: i64, title: &str, due_date: Option<DateTime<Utc>>) -> Homework {
    Homework {
        post: sample_post(id, title),
        due_date,
        submissions: Vec::new(),
    }
}

pub fn sample_submission(id: i64, user: User, status: SubmissionStatus) -> Submission {
    Submission {
        id,
        submitted_at: fixed_time(),
        status,
        grade: None,
        user,
        homework: None,
        archives: Vec::new(),
    }
}
