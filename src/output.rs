use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::error::{CollectorError, Result};
use crate::model::CollectionResult;

/// Directory datasets are written to unless told otherwise.
pub const DEFAULT_DATA_DIR: &str = "data";

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// File name (without extension) for a run started at `now`:
/// `{game_name}#{tag_line}+{YYYYmmdd-HHMMSS}`.
pub fn default_file_stem<Tz>(game_name: &str, tag_line: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{game_name}#{tag_line}+{}",
        now.format(TIMESTAMP_FORMAT)
    )
}

/// `{data_dir}/{stem}.json`
pub fn output_path(data_dir: &Path, stem: &str) -> PathBuf {
    data_dir.join(format!("{stem}.json"))
}

/// Write the collected records to `path` as one JSON array.
///
/// Missing parent directories are created and an existing file is replaced.
pub fn save(result: &CollectionResult, path: &Path) -> Result<()> {
    let io_error = |source: std::io::Error| CollectorError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = serde_json::to_vec(&result.records).map_err(CollectorError::Serialize)?;
    fs::write(path, json).map_err(io_error)?;

    info!(
        path = %path.display(),
        records = result.records.len(),
        "dumped match records for {}",
        result.identity.riot_id()
    );
    Ok(())
}
