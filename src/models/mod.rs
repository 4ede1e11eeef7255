pub mod video;

pub use video::{embed_url_for, VideoRecord, VideoResponse};
