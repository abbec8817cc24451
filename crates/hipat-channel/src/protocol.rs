use serde::{Deserialize, Serialize};

/// Identity of the frame's content window. Messages from any other frame
/// or tab carry a different id and never pass the gate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub String);

impl FrameId {
    pub fn new_random() -> Self {
        Self(format!("frame_{}", uuid::Uuid::new_v4()))
    }
}

/// Contact fields a tool captures about the prospect. Everything is
/// optional on the wire; the session enforces the email requirement
/// before a completion is accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Inbound messages from an embedded tool. Tag strings and field names
/// are the wire contract shared with third-party tool vendors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolMessage {
    #[serde(rename = "TOOL_READY")]
    Ready,
    #[serde(rename = "TOOL_RESIZE")]
    Resize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<i64>,
    },
    #[serde(rename = "TOOL_COMPLETE")]
    Complete {
        #[serde(rename = "clientData", default, skip_serializing_if = "Option::is_none")]
        client_data: Option<ClientData>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        results: Option<serde_json::Map<String, serde_json::Value>>,
    },
    #[serde(rename = "TOOL_CANCEL")]
    Cancel,
}

/// One delivered cross-boundary event: the payload plus where it came
/// from, as observed by the host.
#[derive(Clone, Debug)]
pub struct MessageEnvelope {
    pub source: FrameId,
    pub origin: String,
    pub message: ToolMessage,
}
