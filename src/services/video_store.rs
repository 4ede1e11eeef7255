use std::path::Path;

use rand::{seq::SliceRandom, Rng};

use crate::{
    db::{self, VideoRow},
    error::StoreError,
    models::VideoRecord,
};

/// Encoding of a dataset source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// SQL dump that creates and fills a `videos` table
    Sql,
    /// JSON array of video objects
    Json,
}

impl DatasetFormat {
    /// Infers the format from a file extension (`.sql` or `.json`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "sql" => Some(Self::Sql),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Raw dataset bytes plus the format they are encoded in
#[derive(Debug, Clone)]
pub struct DatasetSource {
    pub format: DatasetFormat,
    pub bytes: Vec<u8>,
}

impl DatasetSource {
    pub fn new(format: DatasetFormat, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            format,
            bytes: bytes.into(),
        }
    }

    pub fn sql(script: impl Into<String>) -> Self {
        Self::new(DatasetFormat::Sql, script.into().into_bytes())
    }

    pub fn json(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(DatasetFormat::Json, bytes)
    }

    fn is_blank(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }
}

/// Immutable, in-memory collection of videos
///
/// A value of this type only exists once a dataset has been loaded, so every
/// query runs against a fully populated store. Readers share it behind an `Arc`
/// without locking.
#[derive(Debug)]
pub struct VideoStore {
    videos: Vec<VideoRecord>,
}

impl VideoStore {
    pub(crate) fn from_records(videos: Vec<VideoRecord>) -> Self {
        Self { videos }
    }

    /// Loads the dataset in one pass
    ///
    /// Fails with `LoadFailure` if the source is blank, malformed, or contains an
    /// invalid row. A source that applies cleanly but holds no rows yields an
    /// empty store.
    pub async fn load(source: DatasetSource) -> Result<Self, StoreError> {
        if source.is_blank() {
            return Err(StoreError::LoadFailure("dataset source is empty".to_string()));
        }

        let videos = match source.format {
            DatasetFormat::Sql => load_sql(&source.bytes).await?,
            DatasetFormat::Json => load_json(&source.bytes)?,
        };

        if let Some(position) = videos.iter().position(|v| v.video_id.is_empty()) {
            return Err(StoreError::LoadFailure(format!(
                "record {} has an empty video id",
                position + 1
            )));
        }

        tracing::info!(
            format = ?source.format,
            video_count = videos.len(),
            "Dataset loaded"
        );

        Ok(Self::from_records(videos))
    }

    /// Reads a dataset file and loads it, picking the format from the extension
    pub async fn load_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let format = DatasetFormat::from_path(path).ok_or_else(|| {
            StoreError::LoadFailure(format!(
                "unsupported dataset file {} (expected .sql or .json)",
                path.display()
            ))
        })?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            StoreError::LoadFailure(format!("failed to read {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read dataset file");

        Self::load(DatasetSource::new(format, bytes)).await
    }

    /// Picks one video uniformly at random from the whole dataset
    pub fn pick_random(&self) -> Result<VideoRecord, StoreError> {
        self.pick_random_with(&mut rand::thread_rng())
    }

    /// Same as [`pick_random`](Self::pick_random) with a caller-supplied RNG
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<VideoRecord, StoreError> {
        self.videos
            .choose(rng)
            .cloned()
            .ok_or(StoreError::EmptyDataset)
    }

    pub fn count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

async fn load_sql(bytes: &[u8]) -> Result<Vec<VideoRecord>, StoreError> {
    let script = std::str::from_utf8(bytes)
        .map_err(|e| StoreError::LoadFailure(format!("SQL dump is not valid UTF-8: {}", e)))?;

    let rows = db::read_videos_from_script(script)
        .await
        .map_err(|e| StoreError::LoadFailure(format!("failed to apply SQL dump: {}", e)))?;

    rows.into_iter().map(VideoRecord::try_from).collect()
}

fn load_json(bytes: &[u8]) -> Result<Vec<VideoRecord>, StoreError> {
    serde_json::from_slice(bytes)
        .map_err(|e| StoreError::LoadFailure(format!("invalid JSON dataset: {}", e)))
}

impl TryFrom<VideoRow> for VideoRecord {
    type Error = StoreError;

    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        let view_count = u64::try_from(row.view_count.unwrap_or(0)).map_err(|_| {
            StoreError::LoadFailure(format!(
                "video {} has a negative view count",
                row.video_id
            ))
        })?;

        Ok(VideoRecord {
            video_id: row.video_id,
            source_url: row.url,
            title: row.title.unwrap_or_default(),
            channel_title: row.channel_title.unwrap_or_default(),
            view_count,
        })
    }
}
