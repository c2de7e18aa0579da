use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use corpus_search::{Corpus, SearchError, SearchRequest};

use crate::rpc::protocol::*;

/// Shared state every request reads from. Never mutated after startup.
pub struct ServerContext {
    pub corpus: Arc<Corpus>,
    pub corpus_path: String,
}

/// Run the JSON-RPC event loop: one request per input line, one reply per output line.
pub fn run_server<R: BufRead, W: Write>(ctx: &ServerContext, reader: R, mut writer: W) {
    info!("Search server ready, waiting for JSON-RPC requests on stdin");

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "Error reading stdin");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(request = %line, "Incoming JSON-RPC");

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Failed to parse JSON-RPC request");
                let reply = Reply::error(Value::Null, PARSE_ERROR, format!("Parse error: {}", e));
                write_message(&mut writer, &reply);
                continue;
            }
        };

        // Notifications have no id — don't send a response
        let Some(id) = request.id else {
            debug!(method = %request.method, "Received notification");
            continue;
        };

        let reply = handle_request(ctx, &request.method, request.params.as_ref(), id);
        write_message(&mut writer, &reply);
    }

    info!("stdin closed, shutting down");
}

fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) {
    let text = match serde_json::to_string(message) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to encode reply");
            return;
        }
    };
    debug!(response = %text, "Outgoing JSON-RPC");
    if let Err(e) = writeln!(writer, "{}", text).and_then(|()| writer.flush()) {
        error!(error = %e, "Failed to write reply");
    }
}

pub(crate) fn handle_request(ctx: &ServerContext, method: &str, params: Option<&Value>, id: Value) -> Reply {
    let outcome = match method {
        "search" => handle_search(ctx, params),
        "info" => handle_info(ctx),
        "ping" => Ok(json!({})),
        _ => {
            return Reply::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", method));
        }
    };

    match outcome {
        Ok(result) => Reply::result(id, result),
        Err(e) if e.is_client_error() => {
            warn!(method, error = %e, "Request rejected");
            Reply::error(id, INVALID_PARAMS, e.to_string())
        }
        Err(e) => {
            error!(method, error = %e, "Request failed");
            Reply::error(id, INTERNAL_ERROR, e.to_string())
        }
    }
}

fn handle_search(ctx: &ServerContext, params: Option<&Value>) -> Result<Value, SearchError> {
    let param = |key: &str| params.and_then(|p| p.get(key)).and_then(param_text);
    let q = param("q");
    let page = param("page");
    let limit = param("limit");

    let request = SearchRequest::from_params(q.as_deref(), page.as_deref(), limit.as_deref())?;
    let response = request.execute(&ctx.corpus);
    debug!(
        query = %request.query,
        page = request.page.page,
        limit = request.page.limit,
        total = response.total_quantity,
        "Search"
    );
    Ok(serde_json::to_value(&response)?)
}

fn handle_info(ctx: &ServerContext) -> Result<Value, SearchError> {
    let info = CorpusInfo {
        corpus: ctx.corpus_path.clone(),
        bytes: ctx.corpus.len(),
        lines: ctx.corpus.lines().len(),
    };
    Ok(serde_json::to_value(&info)?)
}

/// Parameters arrive as strings (URL style) or JSON numbers; both are validated as text.
fn param_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
