use board_core::ProjectId;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the board API
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load project {project_id}: {source}")]
    Load {
        project_id: ProjectId,
        location: ErrorLocation,
        #[source]
        source: Box<SyncError>,
    },
}

impl SyncError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SyncError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert a schema mismatch with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SyncError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        SyncError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        SyncError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        SyncError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a fetch failure as a load failure for `project_id`
    #[track_caller]
    pub fn load(project_id: &ProjectId, source: SyncError) -> Self {
        SyncError::Load {
            project_id: project_id.clone(),
            location: ErrorLocation::from(Location::caller()),
            source: Box::new(source),
        }
    }

    /// The session is no longer valid; the caller should re-authenticate
    pub fn is_unauthorized(&self) -> bool {
        match self {
            SyncError::Unauthorized { .. } => true,
            SyncError::Load { source, .. } => source.is_unauthorized(),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            SyncError::NotFound { .. } => true,
            SyncError::Load { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SyncError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SyncError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SyncError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
