use tracing::{error, warn};

use super::ClassroomService;
use crate::errors::{ClientError, Result};
use crate::models::homeworks::Homework;

pub async fn get_homework(service: &ClassroomService, homework_id: i64) -> Result<Option<Homework>> {
    match service
        .api()
        .get::<Option<Homework>>(&format!("/classroom/homework/{homework_id}"))
        .await
    {
        Ok(homework) => Ok(homework),
        Err(ClientError::NotFound(msg)) => {
            warn!("Homework {} not found: {}", homework_id, msg);
            Ok(None)
        }
        Err(e) => {
            error!("Error loading homework {}: {}", homework_id, e);
            Err(e)
        }
    }
}
