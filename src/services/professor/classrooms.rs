use super::ProfessorService;
use crate::errors::Result;
use crate::models::classes::Classroom;

pub async fn list_classrooms(service: &ProfessorService) -> Result<Vec<Classroom>> {
    let classrooms: Option<Vec<Classroom>> = service.api().get("/professor/classrooms").await?;
    Ok(classrooms.unwrap_or_default())
}
