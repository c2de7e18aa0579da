//! Search server startup.

use std::io;
use std::sync::Arc;

use tracing::info;

use corpus_search::{Corpus, SearchError};

use crate::rpc::server::{run_server, ServerContext};

use super::args::ServeArgs;

pub fn cmd_serve(args: ServeArgs) -> Result<(), SearchError> {
    super::init_logging(&args.log_level);

    info!(corpus = %args.corpus, "Starting search server");

    // The server must not start without its corpus
    let corpus = Corpus::load(&args.corpus)?;
    let ctx = ServerContext {
        corpus: Arc::new(corpus),
        corpus_path: args.corpus,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_server(&ctx, stdin.lock(), stdout.lock());
    Ok(())
}
