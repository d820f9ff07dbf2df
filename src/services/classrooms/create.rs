use tracing::info;

use super::ClassroomService;
use crate::errors::Result;
use crate::models::classes::{Classroom, CreateClassroomRequest};

pub async fn create_classroom(
    service: &ClassroomService,
    request: &CreateClassroomRequest,
) -> Result<Classroom> {
    let classroom: Classroom = service.api().post("/classroom", request).await?;
    info!(
        "Classroom {} created with invite code {}",
        classroom.id, classroom.invite_code
    );
    Ok(classroom)
}
