//! 带用户提示的操作流程
//!
//! 带附件的操作分两步：先并发上传全部文件，全部成功后再发一次创建请求，
//! 请求里带上所有附件 id。任何一步失败都给出同一条错误提示；
//! 已上传的附件不会回收。

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use futures_util::future::try_join_all;
use tracing::{error, info};

use crate::errors::{ClientError, Result};
use crate::forms::{
    CreateClassroomForm, CreateHomeworkForm, CreatePostForm, FormSchema, GradeSubmissionForm,
    JoinClassroomForm, LoginForm, RegisterForm,
};
use crate::models::classes::Classroom;
use crate::models::files::UploadFile;
use crate::models::submissions::CreateSubmissionRequest;
use crate::notify::Notifier;
use crate::services::{ArchiveService, ClassroomService, ProfessorService, StudentService};
use crate::session::{AuthContext, Navigation};
use crate::views::badges::can_submit;
use crate::views::pages::HomeworkPage;

pub const UPLOADING: &str = "Enviando anexos...";
pub const SUBMIT_SUCCESS: &str = "Atividade enviada com sucesso!";
pub const SUBMIT_ERROR: &str = "Erro ao enviar a atividade. Tente novamente.";
pub const NO_FILES_SELECTED: &str = "Selecione ao menos um arquivo para enviar.";
pub const SUBMISSION_CLOSED: &str = "O prazo desta atividade já encerrou. Não é possível enviar.";
pub const POST_SUCCESS: &str = "Postagem criada com sucesso!";
pub const POST_ERROR: &str = "Erro ao criar postagem. Tente novamente.";
pub const HOMEWORK_SUCCESS: &str = "Atividade criada com sucesso!";
pub const HOMEWORK_ERROR: &str = "Erro ao criar atividade. Tente novamente.";
pub const CLASSROOM_ERROR: &str = "Erro ao criar sala de aula. Tente novamente.";
pub const JOIN_ERROR: &str = "Erro ao entrar na sala de aula. Tente novamente.";
pub const GRADE_SUCCESS: &str = "Nota atribuída com sucesso!";
pub const GRADE_ERROR: &str = "Erro ao atribuir a nota. Tente novamente.";
pub const LOGIN_ERROR: &str = "Erro ao fazer login. Tente novamente.";
pub const REGISTER_ERROR: &str = "Erro ao realizar cadastro. Tente novamente.";

pub struct Actions {
    archives: ArchiveService,
    classrooms: ClassroomService,
    professor: ProfessorService,
    student: StudentService,
    notifier: Arc<dyn Notifier>,
}

impl Actions {
    pub fn new(
        archives: ArchiveService,
        classrooms: ClassroomService,
        professor: ProfessorService,
        student: StudentService,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            archives,
            classrooms,
            professor,
            student,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// 并发上传，全部完成后按原顺序返回附件 id
    async fn upload_all(&self, files: Vec<UploadFile>) -> Result<Vec<i64>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        self.notifier.info(UPLOADING);
        let count = files.len();
        let uploads = files
            .into_iter()
            .map(|file| self.archives.upload_file(file));
        let archives = try_join_all(uploads).await?;

        info!("Uploaded {} attachment(s)", count);
        Ok(archives.into_iter().map(|archive| archive.id).collect())
    }

    // 失败时统一提示
    fn report<T>(&self, result: Result<T>, success: Option<&str>, failure: &str) -> Result<T> {
        match result {
            Ok(value) => {
                if let Some(message) = success {
                    self.notifier.success(message);
                }
                Ok(value)
            }
            Err(e) => {
                error!("{}: {}", failure, e);
                self.notifier.error(failure);
                Err(e)
            }
        }
    }

    /// 学生提交作业，至少选择一个文件
    pub async fn submit_activity(&self, homework_id: i64, files: Vec<UploadFile>) -> Result<()> {
        if files.is_empty() {
            return Err(ClientError::validation(NO_FILES_SELECTED));
        }

        let result = async {
            let attachment_ids = self.upload_all(files).await?;
            let request = CreateSubmissionRequest { attachment_ids };
            self.student.send_submission(homework_id, &request).await
        }
        .await;

        self.report(result, Some(SUBMIT_SUCCESS), SUBMIT_ERROR)
    }

    /// 先检查截止时间，逾期的作业不上传也不提交
    pub async fn submit_homework<Tz: TimeZone>(
        &self,
        page: &HomeworkPage,
        files: Vec<UploadFile>,
        now: &DateTime<Tz>,
    ) -> Result<()> {
        if !can_submit(&page.homework, &page.submissions, now) {
            info!("Homework {} is overdue, submission refused", page.homework.post.id);
            return Err(ClientError::validation(SUBMISSION_CLOSED));
        }

        self.submit_activity(page.homework.post.id, files).await
    }

    pub async fn create_post(
        &self,
        classroom_id: i64,
        form: CreatePostForm,
        files: Vec<UploadFile>,
    ) -> Result<()> {
        let mut request = form.parse()?;

        let result = async {
            request.attachment_ids = self.upload_all(files).await?;
            self.professor.create_post(classroom_id, &request).await
        }
        .await;

        self.report(result, Some(POST_SUCCESS), POST_ERROR)
    }

    pub async fn create_homework(
        &self,
        classroom_id: i64,
        form: CreateHomeworkForm,
        files: Vec<UploadFile>,
    ) -> Result<()> {
        let mut request = form.parse()?;

        let result = async {
            request.attachment_ids = self.upload_all(files).await?;
            self.professor.create_homework(classroom_id, &request).await
        }
        .await;

        self.report(result, Some(HOMEWORK_SUCCESS), HOMEWORK_ERROR)
    }

    pub async fn create_classroom(&self, form: CreateClassroomForm) -> Result<Classroom> {
        let request = form.parse()?;
        let result = self.classrooms.create_classroom(&request).await;
        let classroom = self.report(result, None, CLASSROOM_ERROR)?;

        self.notifier.success(&format!(
            "Sala de aula {} criada com sucesso!",
            request.name
        ));
        Ok(classroom)
    }

    pub async fn join_classroom(&self, form: JoinClassroomForm) -> Result<()> {
        let code = form.parse()?;
        let result = self.classrooms.join_classroom(&code).await;
        self.report(result, None, JOIN_ERROR)?;

        self.notifier.success(&format!(
            "Você entrou na sala de aula {code} com sucesso!"
        ));
        Ok(())
    }

    pub async fn grade_submission(
        &self,
        submission_id: i64,
        form: GradeSubmissionForm,
    ) -> Result<()> {
        let request = form.parse()?;
        let result = self.professor.grade_submission(submission_id, &request).await;
        self.report(result, Some(GRADE_SUCCESS), GRADE_ERROR)
    }

    pub async fn login(&self, context: &mut AuthContext, form: LoginForm) -> Result<Navigation> {
        let credentials = form.parse()?;
        let result = context.login(&credentials).await;
        self.report(result, None, LOGIN_ERROR)
    }

    pub async fn register(
        &self,
        context: &mut AuthContext,
        form: RegisterForm,
    ) -> Result<Navigation> {
        let request = form.parse()?;
        let result = context.register(&request).await;
        self.report(result, None, REGISTER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::config::UploadConfig;
    use crate::http::{Method, RequestBody};
    use crate::notify::{NotificationLevel, RecordingNotifier};
    use crate::testing::{
        MockBackend, sample_archive, sample_classroom, sample_homework, test_client,
    };

    fn actions(backend: &MockBackend) -> (Actions, Arc<RecordingNotifier>) {
        let api = Arc::new(test_client(backend));
        let notifier = Arc::new(RecordingNotifier::new());
        let actions = Actions::new(
            ArchiveService::new(api.clone(), UploadConfig::default()),
            ClassroomService::new(api.clone()),
            ProfessorService::new(api.clone()),
            StudentService::new(api),
            notifier.clone(),
        );
        (actions, notifier)
    }

    fn files(count: usize) -> Vec<UploadFile> {
        (0..count)
            .map(|i| UploadFile::new(format!("parte{i}.pdf"), b"%PDF-1.4".to_vec()))
            .collect()
    }

    fn enqueue_uploads(backend: &MockBackend, ids: &[i64]) {
        for id in ids {
            let body = serde_json::to_string(&sample_archive(*id, "parte.pdf")).unwrap();
            backend.enqueue(Method::Post, "/archive/upload", 200, &body);
        }
    }

    #[tokio::test]
    async fn test_submit_uploads_then_submits_once() {
        let backend = MockBackend::new();
        enqueue_uploads(&backend, &[51, 52, 53]);
        backend.respond(Method::Post, "/student/homeworks/12/submissions", 201, "");
        let (actions, notifier) = actions(&backend);

        actions.submit_activity(12, files(3)).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[..3].iter().all(|c| c.path == "/archive/upload"));
        assert_eq!(calls[3].path, "/student/homeworks/12/submissions");

        let RequestBody::Json(body) = &calls[3].body else {
            panic!("submission must carry a JSON body");
        };
        let mut ids: Vec<i64> = serde_json::from_value(body["AttachmentIds"].clone()).unwrap();
        ids.sort();
        assert_eq!(ids, vec![51, 52, 53]);

        assert_eq!(notifier.messages(), vec![UPLOADING, SUBMIT_SUCCESS]);
    }

    #[tokio::test]
    async fn test_submit_refuses_empty_selection() {
        let backend = MockBackend::new();
        let (actions, notifier) = actions(&backend);

        let err = actions.submit_activity(12, Vec::new()).await.unwrap_err();
        assert_eq!(err.code(), "C006");
        assert!(backend.calls().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_overdue_homework_uploads_nothing() {
        let backend = MockBackend::new();
        enqueue_uploads(&backend, &[31]);
        let (actions, notifier) = actions(&backend);
        let now = Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).unwrap();
        let page = HomeworkPage {
            homework: sample_homework(12, "Lista 1", Some(now - chrono::Duration::days(1))),
            submissions: Vec::new(),
        };

        let err = actions.submit_homework(&page, files(1), &now).await.unwrap_err();
        assert_eq!(err, ClientError::validation(SUBMISSION_CLOSED));
        assert!(backend.calls().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_open_homework_submits() {
        let backend = MockBackend::new();
        enqueue_uploads(&backend, &[31]);
        backend.respond(Method::Post, "/student/homeworks/12/submissions", 201, "");
        let (actions, _) = actions(&backend);
        let now = Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).unwrap();
        let page = HomeworkPage {
            homework: sample_homework(12, "Lista 1", Some(now + chrono::Duration::days(1))),
            submissions: Vec::new(),
        };

        actions.submit_homework(&page, files(1), &now).await.unwrap();
        assert_eq!(
            backend.paths(),
            vec!["/archive/upload", "/student/homeworks/12/submissions"]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_skips_submission() {
        let backend = MockBackend::new();
        enqueue_uploads(&backend, &[51]);
        backend.enqueue(Method::Post, "/archive/upload", 500, "disk full");
        let (actions, notifier) = actions(&backend);

        assert!(actions.submit_activity(12, files(2)).await.is_err());

        assert!(
            !backend
                .paths()
                .iter()
                .any(|p| p == "/student/homeworks/12/submissions")
        );
        let last = notifier.notifications().pop().unwrap();
        assert_eq!(last.level, NotificationLevel::Error);
        assert_eq!(last.message, SUBMIT_ERROR);
    }

    #[tokio::test]
    async fn test_submission_failure_reports_error() {
        let backend = MockBackend::new();
        enqueue_uploads(&backend, &[51]);
        backend.respond(Method::Post, "/student/homeworks/12/submissions", 500, "");
        let (actions, notifier) = actions(&backend);

        assert!(actions.submit_activity(12, files(1)).await.is_err());
        // 已上传的附件不回收，只有上传与提交两次请求
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(notifier.messages(), vec![UPLOADING, SUBMIT_ERROR]);
    }

    #[tokio::test]
    async fn test_create_homework_with_attachments() {
        let backend = MockBackend::new();
        enqueue_uploads(&backend, &[70]);
        backend.respond(Method::Post, "/professor/classrooms/4/homeworks", 201, "");
        let (actions, notifier) = actions(&backend);

        let due = Utc.with_ymd_and_hms(2025, 9, 10, 23, 59, 0).unwrap();
        let form = CreateHomeworkForm {
            title: "Lista 4".to_string(),
            content: "Capítulo 5".to_string(),
            is_fixed: false,
            enable_due_date: true,
            due_date: Some(due),
        };
        actions.create_homework(4, form, files(1)).await.unwrap();

        let calls = backend.calls();
        let RequestBody::Json(body) = &calls[1].body else {
            panic!("homework must carry a JSON body");
        };
        assert_eq!(body["AttachmentIds"], json!([70]));
        assert_eq!(body["title"], "Lista 4");
        assert!(body["dueDate"].is_string());
        assert_eq!(notifier.messages(), vec![UPLOADING, HOMEWORK_SUCCESS]);
    }

    #[tokio::test]
    async fn test_create_post_without_files() {
        let backend = MockBackend::new();
        backend.respond(Method::Post, "/professor/classrooms/4/posts", 201, "");
        let (actions, notifier) = actions(&backend);

        let form = CreatePostForm {
            title: "Aviso".to_string(),
            content: "Sem aula sexta".to_string(),
            is_fixed: true,
        };
        actions.create_post(4, form, Vec::new()).await.unwrap();

        assert_eq!(backend.paths(), vec!["/professor/classrooms/4/posts"]);
        assert_eq!(notifier.messages(), vec![POST_SUCCESS]);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let backend = MockBackend::new();
        let (actions, notifier) = actions(&backend);

        let form = GradeSubmissionForm {
            value: 11.0,
            feedback: "Ótimo".to_string(),
        };
        let err = actions.grade_submission(40, form).await.unwrap_err();
        assert!(err.message().contains("A nota máxima é 10"));
        assert!(backend.calls().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_classroom_messages() {
        let backend = MockBackend::new();
        backend.respond_json(Method::Post, "/classroom", &sample_classroom(9, "Física", vec![]));
        backend.respond(Method::Post, "/classroom/XK9P2Q/join", 200, "");
        let (actions, notifier) = actions(&backend);

        let form = CreateClassroomForm {
            name: "Física".to_string(),
            description: String::new(),
        };
        assert_eq!(actions.create_classroom(form).await.unwrap().id, 9);

        let form = JoinClassroomForm {
            code: "XK9P2Q".to_string(),
        };
        actions.join_classroom(form).await.unwrap();

        let join = &backend.calls()[1];
        assert_eq!(join.body, RequestBody::Empty);
        assert_eq!(
            notifier.messages(),
            vec![
                "Sala de aula Física criada com sucesso!",
                "Você entrou na sala de aula XK9P2Q com sucesso!",
            ]
        );
    }

    #[tokio::test]
    async fn test_grade_submission() {
        let backend = MockBackend::new();
        backend.respond(Method::Post, "/professor/submissions/40/grade", 500, "");
        let (actions, notifier) = actions(&backend);

        let form = GradeSubmissionForm {
            value: 8.5,
            feedback: "Bom trabalho".to_string(),
        };
        assert!(actions.grade_submission(40, form.clone()).await.is_err());
        assert_eq!(notifier.messages(), vec![GRADE_ERROR]);

        backend.respond(Method::Post, "/professor/submissions/40/grade", 200, "");
        actions.grade_submission(40, form).await.unwrap();
        assert_eq!(notifier.messages(), vec![GRADE_ERROR, GRADE_SUCCESS]);
    }
}
