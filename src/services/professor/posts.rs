use tracing::info;

use super::ProfessorService;
use crate::errors::Result;
use crate::models::posts::{CreatePostRequest, Post};

pub async fn list_posts(service: &ProfessorService, classroom_id: i64) -> Result<Vec<Post>> {
    let posts: Option<Vec<Post>> = service
        .api()
        .get(&format!("/professor/classrooms/{classroom_id}/posts"))
        .await?;
    Ok(posts.unwrap_or_default())
}

pub async fn create_post(
    service: &ProfessorService,
    classroom_id: i64,
    request: &CreatePostRequest,
) -> Result<()> {
    service
        .api()
        .post_unit(
            &format!("/professor/classrooms/{classroom_id}/posts"),
            Some(request),
        )
        .await?;

    info!(
        "Post '{}' created in classroom {} with {} attachment(s)",
        request.title,
        classroom_id,
        request.attachment_ids.len()
    );
    Ok(())
}
