use axum::{extract::State, response::Html, Extension, Json};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::VideoResponse,
    routes::AppState,
    views::{self, IndexPage},
};

/// Landing page: collection size plus one random video
///
/// Store errors end up in the page's error slot; the page itself always renders.
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Html<String> {
    let mut page = IndexPage {
        total_videos: state.store.count(),
        ..IndexPage::default()
    };

    match state.store.pick_random() {
        Ok(video) => {
            tracing::debug!(
                request_id = %request_id,
                video_id = %video.video_id,
                "Rendering index with video"
            );
            page.video = Some(video);
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                error = %e,
                "Rendering index without a video"
            );
            page.error_message = Some(e.to_string());
        }
    }

    Html(views::render_index(&page))
}

/// Handler for the next-video endpoint used by the page script
pub async fn next_video_json(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<VideoResponse>> {
    let video = state.store.pick_random()?;

    tracing::info!(
        request_id = %request_id,
        video_id = %video.video_id,
        "Sent next video"
    );

    Ok(Json(VideoResponse::from(video)))
}
