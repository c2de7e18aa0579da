//! JSON-RPC 2.0 wire types for the stdio search server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Invalid JSON on the wire
pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Malformed request parameters (client error)
pub const INVALID_PARAMS: i64 = -32602;
/// Server-side failure, e.g. response encoding
pub const INTERNAL_ERROR: i64 = -32603;

// ─── JSON-RPC 2.0 base types ────────────────────────────────────────

/// Incoming JSON-RPC request (a notification if id is None)
#[derive(Deserialize, Debug)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outgoing JSON-RPC response
#[derive(Serialize, Debug)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: Value,
}

/// Outgoing JSON-RPC error response
#[derive(Serialize, Debug)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub error: JsonRpcError,
}

#[derive(Serialize, Debug)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Either kind of reply to a request that carried an id.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Reply {
    Result(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

/// Result of the `info` method.
#[derive(Serialize, Debug)]
pub struct CorpusInfo {
    pub corpus: String,
    pub bytes: usize,
    pub lines: usize,
}

impl JsonRpcResponse {
    pub fn new(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    pub fn new(id: Value, code: i64, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: JsonRpcError { code, message },
        }
    }
}

impl Reply {
    pub fn result(id: Value, result: Value) -> Self {
        Reply::Result(JsonRpcResponse::new(id, result))
    }

    pub fn error(id: Value, code: i64, message: String) -> Self {
        Reply::Error(JsonRpcErrorResponse::new(id, code, message))
    }
}
