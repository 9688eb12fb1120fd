//! W3C Trace Context propagation for span hand-off between processes.
//!
//! Spans outlive the process that started them: a scheduler records where a
//! piece of work came from, a worker picks the trace back up later. The
//! carrier here is a plain string map so it can be persisted next to the
//! work itself.
//!
//! See: https://www.w3.org/TR/trace-context/

use std::collections::HashMap;

use opentelemetry::Context;
use opentelemetry::propagation::{Extractor, Injector, TextMapPropagator};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use serde::{Deserialize, Serialize};

/// Header name for W3C traceparent
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// Header name for W3C tracestate
pub const TRACESTATE_HEADER: &str = "tracestate";

/// A serializable text-map carrier holding a propagated span context.
///
/// Keys are stored lowercased; header names are case-insensitive on both
/// the inject and extract side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpanContext(HashMap<String, String>);

impl SpanContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Injector for SpanContext {
    fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_lowercase(), value);
    }
}

impl Extractor for SpanContext {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_lowercase()).map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// Implemented by anything that carries the span context it was created
/// under, e.g. a persisted job record.
pub trait WithSpanContext {
    fn span_context(&self) -> Option<&SpanContext>;
}

/// Inject the trace context held by `cx` into a carrier as W3C
/// traceparent/tracestate entries.
///
/// Does nothing when `cx` carries no valid span.
pub fn inject(cx: &Context, carrier: &mut dyn Injector) {
    TraceContextPropagator::new().inject_context(cx, carrier);
}

pub(crate) fn extract_into(cx: &Context, carrier: &dyn Extractor) -> Context {
    TraceContextPropagator::new().extract_with_context(cx, carrier)
}
