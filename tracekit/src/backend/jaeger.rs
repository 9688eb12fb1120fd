use std::collections::HashMap;

use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace as sdktrace;
use serde::Deserialize;

use crate::backend::SpanExporter;
use crate::error::TracingError;
use crate::span::key_value_slice;

fn default_service() -> String {
    "web".to_string()
}

/// Jaeger HTTP collector to export spans to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Jaeger {
    /// Collector endpoint, e.g. http://jaeger:14268/api/traces.
    pub endpoint: String,
    /// Process tags to attach to exported spans.
    pub tags: HashMap<String, String>,
    /// Service name reported to jaeger.
    pub service: String,
}

impl Default for Jaeger {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            tags: HashMap::new(),
            service: default_service(),
        }
    }
}

impl Jaeger {
    /// Identifies whether an endpoint has been set.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Build a span exporter syncing spans to the collector.
    pub fn exporter(&self) -> Result<SpanExporter, TracingError> {
        opentelemetry_jaeger::new_collector_pipeline()
            .with_endpoint(self.endpoint.clone())
            .with_service_name(self.service.clone())
            .with_reqwest()
            .with_trace_config(
                sdktrace::config().with_resource(Resource::new(key_value_slice(&self.tags))),
            )
            .build_collector_exporter::<opentelemetry_sdk::runtime::Tokio>()
            .map(SpanExporter::Jaeger)
            .map_err(TracingError::Jaeger)
    }
}
