use tracing::info;

use super::ProfessorService;
use crate::errors::Result;
use crate::models::homeworks::{CreateHomeworkRequest, Homework};

pub async fn list_homeworks(service: &ProfessorService, classroom_id: i64) -> Result<Vec<Homework>> {
    let homeworks: Option<Vec<Homework>> = service
        .api()
        .get(&format!("/professor/classrooms/{classroom_id}/homeworks"))
        .await?;
    Ok(homeworks.unwrap_or_default())
}

pub async fn create_homework(
    service: &ProfessorService,
    classroom_id: i64,
    request: &CreateHomeworkRequest,
) -> Result<()> {
    service
        .api()
        .post_unit(
            &format!("/professor/classrooms/{classroom_id}/homeworks"),
            Some(request),
        )
        .await?;

    info!(
        "Homework '{}' created in classroom {} (due: {:?})",
        request.title, classroom_id, request.due_date
    );
    Ok(())
}
