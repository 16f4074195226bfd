//! Hosting Server Binary
//!
//! Serves training runs, the trained agent's opening, and the
//! computer opponent's replies over HTTP.

use gomoku::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    hosting::Server::run().await
}
