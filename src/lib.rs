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

#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs)]

pub mod api;
mod error;
mod i18n;
mod version;

pub use api::{Request, RequestDescriptor};
pub use error::{Error, Result};
pub use i18n::{Catalog, Localize};
pub use version::{ApiVersion, VersionParseError};
