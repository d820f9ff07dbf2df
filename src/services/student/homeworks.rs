use super::StudentService;
use crate::errors::Result;
use crate::models::homeworks::Homework;

pub async fn list_homeworks(service: &StudentService, classroom_id: i64) -> Result<Vec<Homework>> {
    let homeworks: Option<Vec<Homework>> = service
        .api()
        .get(&format!("/student/classrooms/{classroom_id}/homeworks"))
        .await?;
    Ok(homeworks.unwrap_or_default())
}
