use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, info};

use super::{Cli, Command, HomeworkCommand, render};
use crate::errors::{ClientError, Result};
use crate::forms::{
    CreateClassroomForm, CreateHomeworkForm, CreatePostForm, GradeSubmissionForm,
    JoinClassroomForm, LoginForm, RegisterForm,
};
use crate::models::files::UploadFile;
use crate::models::users::{User, UserRole};
use crate::notify::{ConsoleNotifier, Notifier};
use crate::routes::Route;
use crate::runtime::lifetime::startup::StartupContext;
use crate::services::ArchiveService;
use crate::session::{AuthContext, Navigation};
use crate::views::pages::{self, ClassroomFeed, PageState};
use crate::views::Actions;

const LOGIN_HINT: &str = "Sessão inexistente ou expirada. Entre com `aprenda login <email> --password <senha>`.";

/// 执行一条命令，返回进程退出码
pub async fn run(cli: Cli, context: StartupContext) -> Result<ExitCode> {
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new(!cli.no_color));
    let actions = context.actions(notifier);
    let mut auth = context.auth_context();

    match cli.command {
        Command::Login { email, password } => {
            let form = LoginForm { email, password };
            let outcome = actions.login(&mut auth, form).await;
            finish_navigation(&auth, outcome)
        }
        Command::Register {
            name,
            email,
            password,
            confirm_password,
            profile,
            avatar_id,
        } => {
            let form = RegisterForm {
                name,
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
                // 无法识别的角色交给表单校验报错
                profile: profile.parse::<UserRole>().map(UserRole::code).unwrap_or(0),
                avatar_id,
            };
            let outcome = actions.register(&mut auth, form).await;
            finish_navigation(&auth, outcome)
        }
        Command::Logout => {
            if let Navigation::Redirect(route) = auth.logout() {
                println!("Sessão encerrada. Próxima página: {route}");
            }
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let Some(user) = require_session(&mut auth).await else {
                eprintln!("{LOGIN_HINT}");
                return Ok(ExitCode::FAILURE);
            };
            debug!("Running command as {} ({})", user.email, user.profile);
            run_authenticated(command, &user, &context, &actions).await
        }
    }
}

async fn require_session(auth: &mut AuthContext) -> Option<User> {
    match auth.bootstrap().await {
        Navigation::Redirect(Route::Login) => None,
        _ => auth.user().cloned(),
    }
}

fn finish_navigation(auth: &AuthContext, outcome: Result<Navigation>) -> Result<ExitCode> {
    match outcome {
        Ok(navigation) => {
            if let Some(user) = auth.user() {
                println!("{}", render::user(user));
            }
            if let Navigation::Redirect(route) = navigation {
                println!("Próxima página: {route}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => finish_action::<Navigation>(Err(e)),
    }
}

/// 操作失败时提示已经发出，只有本地校验错误需要打印
fn finish_action<T>(outcome: Result<T>) -> Result<ExitCode> {
    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(ClientError::Validation(message)) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

fn finish_page<T>(state: PageState<T>, render: impl FnOnce(&T) -> String) -> ExitCode {
    match state {
        PageState::Ready(page) => {
            print!("{}", render(&page));
            ExitCode::SUCCESS
        }
        PageState::Failed(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        PageState::Loading => ExitCode::FAILURE,
    }
}

/// 先在本地读取并检查全部文件，再开始上传
async fn read_files(archives: &ArchiveService, paths: &[PathBuf]) -> Result<Vec<UploadFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(archives.read_upload(path).await?);
    }
    Ok(files)
}

async fn run_authenticated(
    command: Command,
    user: &User,
    context: &StartupContext,
    actions: &Actions,
) -> Result<ExitCode> {
    let teaches = user.role().teaches();
    let feed: &dyn ClassroomFeed = if teaches {
        &context.professor
    } else {
        &context.student
    };

    let code = match command {
        Command::Whoami => {
            println!("{}", render::user(user));
            println!("Página inicial: {}", Route::dashboard_for(user.role()));
            ExitCode::SUCCESS
        }
        Command::Dashboard { search } => {
            let state = if teaches {
                pages::professor_dashboard(&context.professor, search.as_deref()).await
            } else {
                pages::student_dashboard(&context.student, search.as_deref()).await
            };
            finish_page(state, |page| render::dashboard(page, &render::now().timezone()))
        }
        Command::Classroom { id } => {
            info!("Opening {}", Route::classroom_for(user.role(), id));
            let state = pages::classroom_page(&context.classrooms, feed, id).await;
            finish_page(state, |page| render::classroom(page, &render::now()))
        }
        Command::CreateClassroom { name, description } => {
            let form = CreateClassroomForm { name, description };
            match actions.create_classroom(form).await {
                Ok(classroom) => {
                    println!("Próxima página: {}", Route::classroom_for(user.role(), classroom.id));
                    ExitCode::SUCCESS
                }
                Err(e) => finish_action::<()>(Err(e))?,
            }
        }
        Command::Join { code } => {
            let form = JoinClassroomForm { code };
            finish_action(actions.join_classroom(form).await)?
        }
        Command::Post {
            classroom,
            title,
            content,
            pinned,
            attachments,
        } => {
            let files = read_files(&context.archives, &attachments).await?;
            let form = CreatePostForm {
                title,
                content,
                is_fixed: pinned,
            };
            finish_action(actions.create_post(classroom, form, files).await)?
        }
        Command::Homework {
            command:
                HomeworkCommand::Create {
                    classroom,
                    title,
                    content,
                    pinned,
                    due,
                    attachments,
                },
        } => {
            let files = read_files(&context.archives, &attachments).await?;
            let form = CreateHomeworkForm {
                title,
                content,
                is_fixed: pinned,
                enable_due_date: due.is_some(),
                due_date: due,
            };
            finish_action(actions.create_homework(classroom, form, files).await)?
        }
        Command::Homework {
            command: HomeworkCommand::Show { id },
        } => {
            let state = pages::homework_page(&context.classrooms, &context.student, id).await;
            finish_page(state, |page| render::homework(page, &render::now()))
        }
        Command::Submit { homework, files } => {
            // 逾期作业在上传前就拒绝
            let page = match pages::homework_page(&context.classrooms, &context.student, homework)
                .await
            {
                PageState::Ready(page) => page,
                PageState::Failed(message) => {
                    eprintln!("{message}");
                    return Ok(ExitCode::FAILURE);
                }
                PageState::Loading => return Ok(ExitCode::FAILURE),
            };
            let files = read_files(&context.archives, &files).await?;
            finish_action(actions.submit_homework(&page, files, &render::now()).await)?
        }
        Command::Submissions {
            homework,
            status,
            search,
        } => {
            let state = pages::teacher_submissions_page(
                &context.professor,
                homework,
                status,
                search.as_deref(),
            )
            .await;
            finish_page(state, |page| {
                render::submissions(page, &render::now().timezone())
            })
        }
        Command::Grade {
            submission,
            value,
            feedback,
        } => {
            let form = GradeSubmissionForm { value, feedback };
            finish_action(actions.grade_submission(submission, form).await)?
        }
        Command::Download { homework, dest } => {
            let Some(homework) = context.classrooms.get_homework(homework).await? else {
                eprintln!("{}", pages::HOMEWORK_NOT_FOUND);
                return Ok(ExitCode::FAILURE);
            };
            for archive in &homework.post.archives {
                let path = context.archives.download(archive, &dest).await?;
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        // 已在登录检查之前处理
        Command::Login { .. } | Command::Register { .. } | Command::Logout => ExitCode::SUCCESS,
    };

    Ok(code)
}
