//! Span creation helpers for request-handling code.
//!
//! All helpers short-circuit to no-ops until a trace provider has been
//! installed via [`configure_trace_provider`], so call sites never need to
//! check whether tracing is enabled.

use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};

use opentelemetry::trace::{Link, SpanRef, Status, TraceContextExt, Tracer};
use opentelemetry::{Context, KeyValue, global};
use opentelemetry_sdk::trace as sdktrace;

use crate::propagation::{WithSpanContext, extract_into};

/// Name under which this library's tracer is registered.
pub const TRACER_NAME: &str = "tracekit";

/// Whether a trace provider has been installed.
///
/// Needed to short-circuit span generation when tracing hasn't been
/// configured.
static CONFIGURED: AtomicBool = AtomicBool::new(false);

pub fn configured() -> bool {
    CONFIGURED.load(Ordering::SeqCst)
}

/// Install `provider` as the global tracer provider and enable the span
/// helpers.
///
/// A noop tracer is registered by default, so the helpers are safe to call
/// before this.
pub fn configure_trace_provider(provider: sdktrace::TracerProvider) {
    global::set_tracer_provider(provider);
    CONFIGURED.store(true, Ordering::SeqCst);
}

/// Attributes attached to a span at creation time.
pub type Attrs = HashMap<String, String>;

pub(crate) fn key_value_slice(attrs: &HashMap<String, String>) -> Vec<KeyValue> {
    attrs
        .iter()
        .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
        .collect()
}

/// Start a span as a child of whatever span `cx` carries, giving back a
/// context that carries the new span.
///
/// Feeding the returned context into a later call makes that span a child
/// of this one:
///
/// ```ignore
/// let root = tracekit::start_span(&Context::new(), "check-resource", Attrs::new());
/// let child = tracekit::start_span(&root, "fetch-image", Attrs::new());
/// tracekit::end(&child, None);
/// tracekit::end(&root, None);
/// ```
pub fn start_span(cx: &Context, component: &str, attrs: Attrs) -> Context {
    start_span_with_links(cx, component, attrs, Vec::new())
}

/// Start a span whose parent is the remote span context carried by
/// `following`, falling back to `cx` when there is none.
pub fn start_span_following<T: WithSpanContext>(
    cx: &Context,
    following: &T,
    component: &str,
    attrs: Attrs,
) -> Context {
    let cx = match following.span_context() {
        Some(carrier) => extract_into(cx, carrier),
        None => cx.clone(),
    };

    start_span_with_links(&cx, component, attrs, Vec::new())
}

/// Start a span under the remote parent carried by `following`, with a span
/// link back to the span in `linked`.
///
/// Used where two traces meet: the new span joins the remote trace while
/// staying discoverable from the local one.
pub fn start_span_linked_to_following<T: WithSpanContext>(
    linked: &Context,
    following: &T,
    component: &str,
    attrs: Attrs,
) -> Context {
    let cx = match following.span_context() {
        Some(carrier) => extract_into(&Context::new(), carrier),
        None => Context::new(),
    };
    let linked_span_context = linked.span().span_context().clone();

    start_span_with_links(
        &cx,
        component,
        attrs,
        vec![Link::new(linked_span_context, Vec::new(), 0)],
    )
}

fn start_span_with_links(cx: &Context, component: &str, attrs: Attrs, links: Vec<Link>) -> Context {
    if !configured() {
        return cx.clone();
    }

    let tracer = global::tracer(TRACER_NAME);
    let mut builder = tracer.span_builder(component.to_owned());
    if !attrs.is_empty() {
        builder = builder.with_attributes(key_value_slice(&attrs));
    }
    if !links.is_empty() {
        builder = builder.with_links(links);
    }
    let span = builder.start_with_context(&tracer, cx);

    cx.with_span(span)
}

/// The span carried by `cx`, or a noop span when it carries none.
pub fn from_context(cx: &Context) -> SpanRef<'_> {
    cx.span()
}

/// End the span carried by `cx`, marking it failed when `err` is given.
pub fn end(cx: &Context, err: Option<&dyn Error>) {
    if !configured() {
        return;
    }

    let span = cx.span();
    if let Some(err) = err {
        span.set_status(Status::error(""));
        span.set_attribute(KeyValue::new("error-message", err.to_string()));
    }
    span.end();
}
