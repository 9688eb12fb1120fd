//! tracekit: distributed-tracing bootstrap for services.
//!
//! Selects a span export backend from configuration (first match wins:
//! Honeycomb, Jaeger, OTLP, Stackdriver), installs an OpenTelemetry trace
//! provider for it, and wraps span creation and W3C context propagation so
//! request-handling code can trace without caring whether tracing was
//! configured at all.

pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod propagation;
pub mod span;

pub use backend::{Honeycomb, Jaeger, Otlp, SpanExporter, Stackdriver};
pub use self::config::{BackendKind, Config};
pub use error::TracingError;
pub use logging::init_logging;
pub use propagation::{
    SpanContext, TRACEPARENT_HEADER, TRACESTATE_HEADER, WithSpanContext, inject,
};
pub use span::{
    Attrs, configure_trace_provider, configured, end, from_context, start_span,
    start_span_following, start_span_linked_to_following,
};

pub use opentelemetry;
pub use opentelemetry::Context;
pub use tracing;
