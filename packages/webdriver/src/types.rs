use serde::Deserialize;
use serde_json::Value;

/// Wrapper for every WebDriver response body.
#[derive(Debug, Deserialize)]
pub struct WireResponse<T> {
    pub value: T,
}

/// Payload of a successful `POST /session`.
#[derive(Debug, Deserialize)]
pub struct NewSessionValue {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(default)]
    pub capabilities: Value,
}

/// Error payload returned by a driver on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorValue {
    pub error: String,
    pub message: String,
}

/// Opaque handle to an element in the current session. The field key is
/// the W3C web element identifier; every conforming driver uses this
/// literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementRef {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    pub id: String,
}
