//! Static-corpus text search engine.
//!
//! Binary crate entry point. All CLI logic is in the `cli` module.

// mimalloc as global allocator: the suffix-array build makes large
// short-lived allocations that the system allocator fragments badly.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli;
mod rpc;

fn main() {
    cli::run();
}
