use tracing::{error, warn};

use super::ClassroomService;
use crate::errors::{ClientError, Result};
use crate::models::classes::Classroom;

pub async fn get_classroom(
    service: &ClassroomService,
    classroom_id: i64,
) -> Result<Option<Classroom>> {
    // 服务端可能返回 404，也可能返回 200 + null
    match service
        .api()
        .get::<Option<Classroom>>(&format!("/classroom/{classroom_id}"))
        .await
    {
        Ok(classroom) => Ok(classroom),
        Err(ClientError::NotFound(msg)) => {
            warn!("Classroom {} not found: {}", classroom_id, msg);
            Ok(None)
        }
        Err(e) => {
            error!("Error loading classroom {}: {}", classroom_id, e);
            Err(e)
        }
    }
}
