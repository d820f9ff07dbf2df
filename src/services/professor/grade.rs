use tracing::{error, info};

use super::ProfessorService;
use crate::errors::Result;
use crate::models::submissions::GradeSubmissionRequest;

pub async fn grade_submission(
    service: &ProfessorService,
    submission_id: i64,
    request: &GradeSubmissionRequest,
) -> Result<()> {
    match service
        .api()
        .post_unit(
            &format!("/professor/submissions/{submission_id}/grade"),
            Some(request),
        )
        .await
    {
        Ok(()) => {
            info!("Submission {} graded with {}", submission_id, request.value);
            Ok(())
        }
        Err(e) => {
            error!("Error grading submission {}: {}", submission_id, e);
            Err(e)
        }
    }
}
