// Copyright 2025 The rocketchat-api Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error conditions.

use serde_json::Error as JsonError;
use thiserror::Error;

/// Result type of the rocketchat-api crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error while assembling an API request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body could not be serialized to JSON.
    #[error("failed to serialize the request body")]
    Json(#[from] JsonError),
}
