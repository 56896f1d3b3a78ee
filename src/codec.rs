//! JSON-RPC request/response envelopes as particld speaks them.
//!
//! Requests are `{"method", "id", "params"}` without a `jsonrpc` version tag.
//! Responses are `{"result", "error", "id"}` where `error` is empty or null on
//! success. Older daemons and some proxies send `error` as a plain string,
//! current ones as a `{code, message}` object; both are accepted.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{Error, Result};

/// Request id sent with every call. Calls are strictly sequential per
/// connection, so the id is never used for correlation.
pub const REQUEST_ID: u64 = 2;

#[derive(Debug, Serialize)]
struct Request<'a> {
    method: &'a str,
    id: u64,
    params: &'a [Value],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireError {
    Message(String),
    Object {
        #[serde(default)]
        code: Option<i64>,
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<WireError>,
}

/// Serializes a request envelope for `method`.
pub fn encode_request(method: &str, params: &[Value]) -> Result<Vec<u8>> {
    let request = Request {
        method,
        id: REQUEST_ID,
        params,
    };
    serde_json::to_vec(&request).map_err(Error::Encode)
}

/// Decodes a response envelope and binds its `result` into `T`.
///
/// A non-empty `error` wins over whatever `result` holds, so a daemon error
/// is reported as [`Error::Rpc`] even when `result` is null or does not fit `T`.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let response: Response = serde_json::from_slice(body).map_err(Error::Decode)?;

    match response.error {
        Some(WireError::Message(message)) if !message.is_empty() => {
            return Err(Error::Rpc {
                code: None,
                message,
            });
        }
        Some(WireError::Object { code, message }) => {
            return Err(Error::Rpc { code, message });
        }
        _ => {}
    }

    T::deserialize(response.result).map_err(Error::Decode)
}
