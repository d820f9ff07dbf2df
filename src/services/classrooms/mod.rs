pub mod create;
pub mod get;
pub mod homework;
pub mod join;
pub mod students;

use std::sync::Arc;

use crate::errors::Result;
use crate::http::ApiClient;
use crate::models::classes::{Classroom, CreateClassroomRequest};
use crate::models::homeworks::Homework;
use crate::models::users::User;

#[derive(Clone)]
pub struct ClassroomService {
    api: Arc<ApiClient>,
}

impl ClassroomService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    // 获取班级详情，不存在时返回 None
    pub async fn get_classroom(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        get::get_classroom(self, classroom_id).await
    }

    // 教师创建班级
    pub async fn create_classroom(&self, request: &CreateClassroomRequest) -> Result<Classroom> {
        create::create_classroom(self, request).await
    }

    // 获取作业详情
    pub async fn get_homework(&self, homework_id: i64) -> Result<Option<Homework>> {
        homework::get_homework(self, homework_id).await
    }

    // 班级学生列表
    pub async fn list_students(&self, classroom_id: i64) -> Result<Vec<User>> {
        students::list_students(self, classroom_id).await
    }

    // 学生通过邀请码加入班级
    pub async fn join_classroom(&self, code: &str) -> Result<()> {
        join::join_classroom(self, code).await
    }
}
