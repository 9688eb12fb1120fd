use opentelemetry::trace::TraceError;
use thiserror::Error;

/// Errors raised while loading configuration, building span exporters, or
/// installing the trace provider.
#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to load tracing configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid otlp header `{name}`")]
    InvalidHeader { name: String },

    #[error("failed to create otlp exporter: {0}")]
    Otlp(#[source] TraceError),

    #[error("failed to create jaeger exporter: {0}")]
    Jaeger(#[source] TraceError),

    #[error("failed to authorize against gcp: {0}")]
    GcpAuth(String),

    #[error("failed to create stackdriver exporter: {0}")]
    Stackdriver(String),
}
