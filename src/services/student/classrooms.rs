use super::StudentService;
use crate::errors::Result;
use crate::models::classes::Classroom;

pub async fn list_classrooms(service: &StudentService) -> Result<Vec<Classroom>> {
    let classrooms: Option<Vec<Classroom>> = service.api().get("/student/classrooms").await?;
    Ok(classrooms.unwrap_or_default())
}
