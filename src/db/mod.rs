pub mod sqlite;

pub use sqlite::{create_memory_pool, read_videos_from_script, VideoRow};
