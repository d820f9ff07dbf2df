use super::ClassroomService;
use crate::errors::Result;
use crate::models::users::User;

pub async fn list_students(service: &ClassroomService, classroom_id: i64) -> Result<Vec<User>> {
    let students: Option<Vec<User>> = service
        .api()
        .get(&format!("/classroom/{classroom_id}/students"))
        .await?;
    Ok(students.unwrap_or_default())
}
