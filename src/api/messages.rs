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

//! Requests for the `chat.*` message endpoints.

use http::Method;
use serde::Serialize;

use crate::{
    i18n::{self, Localize},
    version::ApiVersion,
    Request, Result,
};

/// Message type tag that clients attach to the event announcing a started
/// Jitsi call.
pub const JITSI_CALL_STARTED: &str = "jitsi_call_started";

/// Request to post a message to a room.
///
/// # Examples
///
/// ```
/// use rocketchat_api::{api::messages::SendMessageRequest, Catalog, Request};
///
/// let request = SendMessageRequest::new("abc123", "room42", "hello");
/// let descriptor = request.descriptor(&Catalog);
///
/// assert_eq!(descriptor.path, "/api/v1/chat.sendMessage");
/// ```
#[derive(Clone, Debug)]
pub struct SendMessageRequest {
    id: String,
    room_id: String,
    text: String,
    message_type: Option<String>,
}

impl SendMessageRequest {
    /// Create a request to send a plain user message.
    ///
    /// `id` is a caller-supplied unique message identifier and `room_id`
    /// names the destination room; neither is validated here. `text` may
    /// be empty for an intentionally blank message, e.g. one carrying
    /// only an attachment.
    pub fn new(
        id: impl Into<String>,
        room_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            room_id: room_id.into(),
            text: text.into(),
            message_type: None,
        }
    }

    /// Tag the message as something other than plain user text, e.g. a
    /// system-generated event.
    pub fn message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }
}

impl Request for SendMessageRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/api/v1/chat.sendMessage";
    const REQUIRED_VERSION: ApiVersion = ApiVersion::new(0, 60, 0);

    fn body(&self, i18n: &dyn Localize) -> Result<Vec<u8>> {
        let mut message = MessagePayload {
            id: &self.id,
            room_id: &self.room_id,
            text: &self.text,
            message_type: self.message_type.as_deref(),
            action_links: None,
        };

        // Hacky interop with the web clients: they only render a join
        // button for a Jitsi call if the call-start message itself carries
        // this action link. Known special case, nothing else needs it.
        if self.message_type.as_deref() == Some(JITSI_CALL_STARTED) {
            message.action_links = Some(vec![ActionLink {
                icon: "icon-videocam".to_owned(),
                label: i18n.localize(i18n::JOIN_VIDEO_CALL),
                method_id: "joinJitsiCall".to_owned(),
                params: String::new(),
            }]);
        }

        Ok(serde_json::to_vec(&SendMessageBody { message })?)
    }
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    message: MessagePayload<'a>,
}

/// Wire form of an outbound message. Field order is the serialization
/// order, kept stable for reproducibility.
#[derive(Debug, Serialize)]
struct MessagePayload<'a> {
    #[serde(rename = "_id")]
    id: &'a str,

    #[serde(rename = "rid")]
    room_id: &'a str,

    #[serde(rename = "msg")]
    text: &'a str,

    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    message_type: Option<&'a str>,

    #[serde(rename = "actionLinks", skip_serializing_if = "Option::is_none")]
    action_links: Option<Vec<ActionLink>>,
}

/// A structured UI affordance embedded in a message payload, rendered by
/// receiving clients as a button.
#[derive(Debug, Serialize)]
struct ActionLink {
    icon: String,
    label: String,
    method_id: String,
    params: String,
}

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::{json, Value};

    use super::{SendMessageRequest, JITSI_CALL_STARTED};
    use crate::{ApiVersion, Catalog, Request};

    fn parse(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[test]
    fn plain_message_body_bytes() {
        let body = SendMessageRequest::new("abc123", "room42", "hello")
            .body(&Catalog)
            .unwrap();

        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"message":{"_id":"abc123","rid":"room42","msg":"hello"}}"#
        );
    }

    #[test]
    fn empty_text_is_kept() {
        let body = SendMessageRequest::new("abc123", "room42", "").body(&Catalog).unwrap();

        assert_eq!(
            parse(&body),
            json!({"message": {"_id": "abc123", "rid": "room42", "msg": ""}})
        );
    }

    #[test]
    fn message_type_adds_only_the_tag() {
        let body = SendMessageRequest::new("abc123", "room42", "the text")
            .message_type("system")
            .body(&Catalog)
            .unwrap();

        assert_eq!(
            parse(&body),
            json!({
                "message": {
                    "_id": "abc123",
                    "rid": "room42",
                    "msg": "the text",
                    "t": "system",
                }
            })
        );
    }

    #[test]
    fn jitsi_call_start_carries_the_action_link() {
        let body = SendMessageRequest::new("abc123", "room42", "")
            .message_type(JITSI_CALL_STARTED)
            .body(&Catalog)
            .unwrap();

        assert_eq!(
            parse(&body),
            json!({
                "message": {
                    "_id": "abc123",
                    "rid": "room42",
                    "msg": "",
                    "t": "jitsi_call_started",
                    "actionLinks": [{
                        "icon": "icon-videocam",
                        "label": "Join video call",
                        "method_id": "joinJitsiCall",
                        "params": "",
                    }],
                }
            })
        );
    }

    #[test]
    fn metadata_is_fixed() {
        let descriptor = SendMessageRequest::new("", "", "").descriptor(&Catalog);

        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.path, "/api/v1/chat.sendMessage");
        assert_eq!(descriptor.required_version, ApiVersion::new(0, 60, 0));

        let descriptor = SendMessageRequest::new("abc123", "room42", "hello")
            .message_type(JITSI_CALL_STARTED)
            .descriptor(&Catalog);

        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.path, "/api/v1/chat.sendMessage");
        assert_eq!(descriptor.required_version, ApiVersion::new(0, 60, 0));
    }

    #[test]
    fn descriptor_body_matches_direct_serialization() {
        let request = SendMessageRequest::new("abc123", "room42", "hello");

        assert_eq!(
            request.descriptor(&Catalog).body,
            Some(request.body(&Catalog).unwrap())
        );
    }
}
