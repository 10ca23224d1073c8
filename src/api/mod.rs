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

//! Typed requests for the REST API.
//!
//! Every endpoint is modeled as a struct implementing [`Request`], which
//! fixes the HTTP method, the path and the oldest server release that
//! supports the endpoint, and serializes the body from statically typed
//! payload structs. [`Request::descriptor`] bundles all of that into a
//! [`RequestDescriptor`] for the transport layer to send.

pub mod messages;

use http::Method;
use tracing::warn;

use crate::{i18n::Localize, version::ApiVersion, Result};

/// A single endpoint of the REST API.
pub trait Request {
    /// The HTTP method of the endpoint.
    const METHOD: Method;

    /// The path of the endpoint, relative to the server root.
    const PATH: &'static str;

    /// The oldest server release that supports the endpoint.
    const REQUIRED_VERSION: ApiVersion;

    /// Serialize the request body.
    ///
    /// `i18n` resolves the localization keys of any display strings
    /// embedded in the payload.
    fn body(&self, i18n: &dyn Localize) -> Result<Vec<u8>>;

    /// Assemble the full descriptor for the transport layer.
    ///
    /// A body that fails to serialize is logged and degraded to `None`.
    /// Transports must treat an absent body as "do not send".
    fn descriptor(&self, i18n: &dyn Localize) -> RequestDescriptor {
        let body = match self.body(i18n) {
            Ok(body) => Some(body),
            Err(error) => {
                warn!(%error, path = Self::PATH, "Failed to serialize the request body");
                None
            }
        };

        RequestDescriptor {
            method: Self::METHOD,
            path: Self::PATH,
            required_version: Self::REQUIRED_VERSION,
            body,
        }
    }
}

/// Everything the transport layer needs to issue a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The HTTP method to use.
    pub method: Method,

    /// The endpoint path, relative to the server root.
    pub path: &'static str,

    /// The oldest server release that supports the endpoint.
    pub required_version: ApiVersion,

    /// The serialized request body, `None` if serialization failed.
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    /// Whether a server reporting `version` understands this request.
    pub fn supported_by(&self, version: ApiVersion) -> bool {
        version >= self.required_version
    }
}
