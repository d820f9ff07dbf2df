use tracing::{error, info};

use super::StudentService;
use crate::errors::Result;
use crate::models::submissions::{CreateSubmissionRequest, Submission};

pub async fn list_submissions(service: &StudentService, homework_id: i64) -> Result<Vec<Submission>> {
    let submissions: Option<Vec<Submission>> = service
        .api()
        .get(&format!("/student/homeworks/{homework_id}/submissions"))
        .await?;
    Ok(submissions.unwrap_or_default())
}

pub async fn send_submission(
    service: &StudentService,
    homework_id: i64,
    request: &CreateSubmissionRequest,
) -> Result<()> {
    match service
        .api()
        .post_unit(
            &format!("/student/homeworks/{homework_id}/submissions"),
            Some(request),
        )
        .await
    {
        Ok(()) => {
            info!(
                "Submission sent for homework {} with {} attachment(s)",
                homework_id,
                request.attachment_ids.len()
            );
            Ok(())
        }
        Err(e) => {
            error!("Error sending submission for homework {}: {}", homework_id, e);
            Err(e)
        }
    }
}
