// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced at the edges of the engine.
//!
//! Scoring itself is total: once arguments have the right shape nothing in
//! here can fail. Errors only come from the request boundary (a required
//! collection was absent), from option validation, or from loading JSON.

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required collection was absent. Caller contract violation.
    #[error("invalid argument: `{name}` must be provided")]
    InvalidArgument { name: &'static str },
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
