//! CLI argument structs for all subcommands.

use clap::Parser;

use corpus_search::DEFAULT_CORPUS_PATH;

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  corpus-search query "to be"                      First page, 20 results
  corpus-search query "to be" --page 2 --limit 5   Second page of five
  corpus-search query "love death" --pretty        Words on the same line (fallback)
  corpus-search query hamlet --corpus plays.txt    Search another corpus"#)]
pub struct QueryArgs {
    /// Search query (literal substring; words are intersected per line when the literal is absent)
    pub query: String,

    /// Corpus file to load (lines separated by CRLF)
    #[arg(long, default_value = DEFAULT_CORPUS_PATH)]
    pub corpus: String,

    /// Page number, 1-based (default: 1)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Results per page (default: 20)
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"PROTOCOL:
  One JSON-RPC 2.0 request per line on stdin, one reply per line on stdout.

  {"jsonrpc":"2.0","id":1,"method":"search","params":{"q":"to be","page":"1","limit":"20"}}
  {"jsonrpc":"2.0","id":2,"method":"info"}
  {"jsonrpc":"2.0","id":3,"method":"ping"}"#)]
pub struct ServeArgs {
    /// Corpus file to load (lines separated by CRLF)
    #[arg(long, default_value = DEFAULT_CORPUS_PATH)]
    pub corpus: String,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
