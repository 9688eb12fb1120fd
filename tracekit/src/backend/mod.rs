//! Span export backends, one module per supported trace sink.

mod honeycomb;
mod jaeger;
mod otlp;
mod stackdriver;

pub use honeycomb::Honeycomb;
pub use jaeger::Jaeger;
pub use otlp::Otlp;
pub use stackdriver::Stackdriver;

use futures::future::BoxFuture;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter as SdkSpanExporter};

/// A configured span exporter, ready to hand to a trace provider.
///
/// A closed enum rather than a boxed trait object so the provider builder
/// gets a concrete `SpanExporter` implementation.
#[derive(Debug)]
pub enum SpanExporter {
    Otlp(opentelemetry_otlp::SpanExporter),
    Jaeger(opentelemetry_jaeger::Exporter),
    Stackdriver(opentelemetry_stackdriver::StackDriverExporter),
}

impl SdkSpanExporter for SpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        match self {
            Self::Otlp(exporter) => exporter.export(batch),
            Self::Jaeger(exporter) => exporter.export(batch),
            Self::Stackdriver(exporter) => exporter.export(batch),
        }
    }

    fn shutdown(&mut self) {
        match self {
            Self::Otlp(exporter) => exporter.shutdown(),
            Self::Jaeger(exporter) => exporter.shutdown(),
            Self::Stackdriver(exporter) => exporter.shutdown(),
        }
    }
}
