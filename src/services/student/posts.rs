use super::StudentService;
use crate::errors::Result;
use crate::models::posts::Post;

pub async fn list_posts(service: &StudentService, classroom_id: i64) -> Result<Vec<Post>> {
    let posts: Option<Vec<Post>> = service
        .api()
        .get(&format!("/professor/classrooms/{classroom_id}/posts"))
        .await?;
    Ok(posts.unwrap_or_default())
}
