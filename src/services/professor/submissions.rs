use super::ProfessorService;
use crate::errors::Result;
use crate::models::submissions::Submission;

pub async fn list_submissions(
    service: &ProfessorService,
    homework_id: i64,
) -> Result<Vec<Submission>> {
    let submissions: Option<Vec<Submission>> = service
        .api()
        .get(&format!("/professor/homeworks/{homework_id}/submissions"))
        .await?;
    Ok(submissions.unwrap_or_default())
}
