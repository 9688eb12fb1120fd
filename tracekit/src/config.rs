use std::collections::HashMap;

use config::{Config as Cfg, Environment, File};
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::{self as sdktrace, Sampler};
use serde::Deserialize;
use tracing::info;

use crate::backend::{Honeycomb, Jaeger, Otlp, SpanExporter, Stackdriver};
use crate::error::TracingError;
use crate::span::{TRACER_NAME, configure_trace_provider, key_value_slice};

fn default_service_name() -> String {
    "web".to_string()
}

/// Tracing configuration: service identity plus one optional block per
/// backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name to attach to spans as metadata.
    pub service_name: String,
    /// Extra attributes to attach to spans as metadata.
    pub attributes: HashMap<String, String>,
    pub honeycomb: Honeycomb,
    pub jaeger: Jaeger,
    pub otlp: Otlp,
    pub stackdriver: Stackdriver,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            attributes: HashMap::new(),
            honeycomb: Honeycomb::default(),
            jaeger: Jaeger::default(),
            otlp: Otlp::default(),
            stackdriver: Stackdriver::default(),
        }
    }
}

/// The export backends, in selection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Honeycomb,
    Jaeger,
    Otlp,
    Stackdriver,
}

impl Config {
    /// Load from an optional `tracing` config file plus `TRACING__*`
    /// environment variables.
    pub fn load() -> Result<Self, TracingError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("tracing").required(false))
            .add_source(Environment::with_prefix("TRACING").separator("__"))
            .build()?;

        Ok(config.try_deserialize::<Self>()?)
    }

    /// The backend spans will be exported to, if any.
    ///
    /// First match wins; earlier backends shadow later ones.
    pub fn active_backend(&self) -> Option<BackendKind> {
        if self.honeycomb.is_configured() {
            Some(BackendKind::Honeycomb)
        } else if self.jaeger.is_configured() {
            Some(BackendKind::Jaeger)
        } else if self.otlp.is_configured() {
            Some(BackendKind::Otlp)
        } else if self.stackdriver.is_configured() {
            Some(BackendKind::Stackdriver)
        } else {
            None
        }
    }

    /// Build the selected backend's exporter, install a trace provider for
    /// it globally, and hand back the tracer for subscriber integration.
    ///
    /// Does nothing when no backend is configured; the span helpers stay
    /// no-ops in that case.
    pub async fn prepare(&self) -> Result<Option<sdktrace::Tracer>, TracingError> {
        let Some(backend) = self.active_backend() else {
            return Ok(None);
        };

        let exporter = match backend {
            BackendKind::Honeycomb => self.honeycomb.exporter()?,
            BackendKind::Jaeger => self.jaeger.exporter()?,
            BackendKind::Otlp => self.otlp.exporter()?,
            BackendKind::Stackdriver => self.stackdriver.exporter().await?,
        };

        let provider = self.trace_provider(exporter);
        let tracer = provider.tracer(TRACER_NAME);
        configure_trace_provider(provider);

        info!(
            backend = ?backend,
            service_name = %self.service_name,
            "tracing configured"
        );

        Ok(Some(tracer))
    }

    fn trace_provider(&self, exporter: SpanExporter) -> sdktrace::TracerProvider {
        sdktrace::TracerProvider::builder()
            .with_config(
                sdktrace::config()
                    .with_sampler(Sampler::AlwaysOn)
                    .with_resource(self.resource()),
            )
            .with_simple_exporter(exporter)
            .build()
    }

    fn resource(&self) -> Resource {
        let mut attributes = vec![
            KeyValue::new("telemetry.sdk.name", "opentelemetry"),
            KeyValue::new("telemetry.sdk.language", "rust"),
            KeyValue::new("service.name", self.service_name.clone()),
        ];
        attributes.extend(key_value_slice(&self.attributes));
        if self.active_backend() == Some(BackendKind::Stackdriver) {
            attributes.push(KeyValue::new(
                "gcp.project.id",
                self.stackdriver.project_id.clone(),
            ));
        }

        Resource::new(attributes)
    }
}
