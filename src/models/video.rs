use serde::{Deserialize, Serialize};

/// Base of the embeddable player URL; the video id is appended to it.
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Query string appended to every embed URL (autoplay + JS API control)
pub const EMBED_QUERY: &str = "autoplay=1&enablejsapi=1";

/// A single video from the preloaded dataset
///
/// Also the shape of one entry in a JSON dataset file:
/// `{"videoId": "...", "url": "...", "title": "...", "channelTitle": "...", "viewCount": 3}`.
/// `title`, `channelTitle` and `viewCount` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_id: String,
    #[serde(rename = "url")]
    pub source_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub view_count: u64,
}

impl VideoRecord {
    /// Player URL derived from the video id. Never stored.
    pub fn embed_url(&self) -> String {
        embed_url_for(&self.video_id)
    }
}

pub fn embed_url_for(video_id: &str) -> String {
    format!("{}{}?{}", EMBED_BASE_URL, video_id, EMBED_QUERY)
}

/// Video payload returned by `GET /next-video-json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub view_count: u64,
    pub url: String,
    pub embed_url: String,
}

impl From<VideoRecord> for VideoResponse {
    fn from(video: VideoRecord) -> Self {
        let embed_url = video.embed_url();
        Self {
            video_id: video.video_id,
            title: video.title,
            channel_title: video.channel_title,
            view_count: video.view_count,
            url: video.source_url,
            embed_url,
        }
    }
}
