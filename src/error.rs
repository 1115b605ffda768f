//! Error types for route loading and planning.

use std::fmt;
use std::io;

/// Which duration table a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Mine to destination plant.
    Haul,
    /// Yard or mine to mine, before loading.
    Reposition,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Haul => write!(f, "haul"),
            RouteKind::Reposition => write!(f, "reposition"),
        }
    }
}

#[derive(Debug)]
pub enum DispatchError {
    /// A duration lookup hit a pair missing from its table. Aborts the run.
    UndefinedRoute {
        kind: RouteKind,
        origin: String,
        destination: String,
    },
    InvalidScenario(String),
    Io(io::Error),
    Json(serde_json::Error),
    Http(reqwest::Error),
}

impl DispatchError {
    pub fn undefined_route(kind: RouteKind, origin: &str, destination: &str) -> Self {
        DispatchError::UndefinedRoute {
            kind,
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UndefinedRoute {
                kind,
                origin,
                destination,
            } => write!(f, "undefined {} route: {} -> {}", kind, origin, destination),
            DispatchError::InvalidScenario(reason) => write!(f, "invalid scenario: {}", reason),
            DispatchError::Io(err) => write!(f, "io error: {}", err),
            DispatchError::Json(err) => write!(f, "json error: {}", err),
            DispatchError::Http(err) => write!(f, "route service error: {}", err),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Io(err) => Some(err),
            DispatchError::Json(err) => Some(err),
            DispatchError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DispatchError {
    fn from(err: io::Error) -> Self {
        DispatchError::Io(err)
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Json(err)
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Http(err)
    }
}
