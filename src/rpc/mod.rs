//! Line-delimited JSON-RPC 2.0 over stdio: the serving surface for `search`.

pub mod protocol;
pub mod server;
