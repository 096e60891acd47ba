//! Startup hotel catalogue seeding.
//!
//! The catalogue is loaded out-of-band from a JSON array of hotel documents
//! (`HOTEL_API_HOTEL_SEED_PATH`). Each entry is upserted by `hotel_id`, so
//! re-running the seed is harmless.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::Hotel;
use crate::domain::ports::{HotelRepository, HotelRepositoryError};

/// Errors returned while seeding hotels.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Seed file could not be read.
    #[error("failed to read hotel seed at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Seed file is not a JSON array of hotels.
    #[error("failed to parse hotel seed at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Storing a hotel failed.
    #[error("failed to store hotel: {0}")]
    Store(#[from] HotelRepositoryError),
}

/// Upsert every hotel in `path` when a path is configured.
///
/// Returns the number of hotels written.
pub async fn seed_hotels_on_startup(
    path: Option<&Path>,
    hotels: &dyn HotelRepository,
) -> Result<usize, SeedingError> {
    let Some(path) = path else {
        info!(reason = "no seed path", "hotel seeding skipped");
        return Ok(0);
    };

    let seed = load_seed(path)?;
    for hotel in &seed {
        hotels.upsert(hotel).await?;
    }
    info!(path = %path.display(), count = seed.len(), "hotel catalogue seeded");
    Ok(seed.len())
}

fn read_error(path: &Path, source: std::io::Error) -> SeedingError {
    SeedingError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn load_seed(path: &Path) -> Result<Vec<Hotel>, SeedingError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "seed path must name a file",
            ),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    let payload = dir
        .read(Path::new(file_name))
        .map_err(|source| read_error(path, source))?;
    serde_json::from_slice(&payload).map_err(|source| SeedingError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
