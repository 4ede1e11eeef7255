pub mod video_store;

pub use video_store::{DatasetFormat, DatasetSource, VideoStore};
