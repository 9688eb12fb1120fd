//! Span helpers must behave as no-ops while no trace provider is installed.
//!
//! Lives in its own integration binary: the configured flag is
//! process-global, so these assertions cannot share a process with tests
//! that install a provider.

use std::error::Error;

use opentelemetry::Context;
use opentelemetry::trace::TraceContextExt;
use tracekit::{Attrs, SpanContext, WithSpanContext};

struct Job {
    span_context: Option<SpanContext>,
}

impl WithSpanContext for Job {
    fn span_context(&self) -> Option<&SpanContext> {
        self.span_context.as_ref()
    }
}

#[test]
fn start_span_returns_context_unchanged() {
    assert!(!tracekit::configured());

    let cx = tracekit::start_span(&Context::new(), "check-resource", Attrs::new());
    assert!(!cx.span().span_context().is_valid());
}

#[test]
fn start_span_following_creates_no_span() {
    let job = Job {
        span_context: Some(SpanContext::new()),
    };

    let cx = tracekit::start_span_following(&Context::new(), &job, "run-job", Attrs::new());
    assert!(!cx.span().span_context().is_valid());
}

#[test]
fn end_is_a_noop() {
    let cx = tracekit::start_span(&Context::new(), "run-task", Attrs::new());

    let err = std::io::Error::other("task exploded");
    tracekit::end(&cx, Some(&err as &dyn Error));
}

#[test]
fn from_context_hands_back_noop_span() {
    let cx = Context::new();
    let span = tracekit::from_context(&cx);
    assert!(!span.span_context().is_valid());
}
