//! Loading and validating command inputs through `cap-std`.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use livability_core::{LocationRecord, PreferenceProfile, ensure_unique_names};
use log::debug;
use serde::de::DeserializeOwned;

use crate::CliError;

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of location records and check their invariants.
pub(crate) fn load_locations(path: &Utf8Path) -> Result<Vec<LocationRecord>, CliError> {
    let locations: Vec<LocationRecord> = read_json(path)?;
    let invalid = |source| CliError::InvalidLocations {
        path: path.to_path_buf(),
        source,
    };
    for location in &locations {
        location.validate().map_err(invalid)?;
    }
    ensure_unique_names(&locations).map_err(invalid)?;
    debug!("loaded {} locations from {path}", locations.len());
    Ok(locations)
}

/// Load a JSON preference profile and check it is well formed.
pub(crate) fn load_profile(path: &Utf8Path) -> Result<PreferenceProfile, CliError> {
    let profile: PreferenceProfile = read_json(path)?;
    profile
        .validate()
        .map_err(|source| CliError::InvalidProfile {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded profile led by {:?}", profile.importance_rank.first());
    Ok(profile)
}
