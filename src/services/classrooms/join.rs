use tracing::{error, info};

use super::ClassroomService;
use crate::errors::Result;
use crate::http::encode_path_segment;

pub async fn join_classroom(service: &ClassroomService, code: &str) -> Result<()> {
    let code = code.trim();
    let segment = encode_path_segment(code)?;

    match service
        .api()
        .post_unit::<()>(&format!("/classroom/{segment}/join"), None)
        .await
    {
        Ok(()) => {
            info!("Joined classroom with code {}", code);
            Ok(())
        }
        Err(e) => {
            error!("Error joining classroom with code {}: {}", code, e);
            Err(e)
        }
    }
}
