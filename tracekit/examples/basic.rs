//! Bootstrap tracing from the environment and emit a small span tree.
//!
//! Point it at a collector, e.g.:
//!
//! ```sh
//! TRACING__OTLP__ADDRESS=localhost:4317 cargo run --example basic
//! ```

use opentelemetry::Context;
use tracekit::{Attrs, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let tracer = config.prepare().await?;
    tracekit::init_logging("info,tracekit=debug", tracer);

    let root = tracekit::start_span(&Context::new(), "demo", Attrs::new());
    let step = tracekit::start_span(
        &root,
        "demo-step",
        Attrs::from([("step".to_string(), "one".to_string())]),
    );

    tracing::info!("doing traced work");

    tracekit::end(&step, None);
    tracekit::end(&root, None);

    Ok(())
}
