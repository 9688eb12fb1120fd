use std::collections::HashMap;

use opentelemetry_otlp::WithExportConfig;
use serde::Deserialize;
use tonic::metadata::{MetadataKey, MetadataMap, MetadataValue};
use tonic::transport::ClientTlsConfig;

use crate::backend::SpanExporter;
use crate::error::TracingError;

/// OTLP gRPC collector to export spans to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Otlp {
    /// host:port of the collector.
    pub address: String,
    /// Headers attached to every export request.
    pub headers: HashMap<String, String>,
    /// Dial the collector over TLS.
    pub use_tls: bool,
}

impl Otlp {
    /// Identifies whether a collector address has been set.
    pub fn is_configured(&self) -> bool {
        !self.address.is_empty()
    }

    /// Build a span exporter syncing spans to the configured collector.
    pub fn exporter(&self) -> Result<SpanExporter, TracingError> {
        let scheme = if self.use_tls { "https" } else { "http" };

        let mut builder = opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(format!("{}://{}", scheme, self.address))
            .with_metadata(self.metadata()?);

        if self.use_tls {
            builder = builder.with_tls_config(ClientTlsConfig::new());
        }

        builder
            .build_span_exporter()
            .map(SpanExporter::Otlp)
            .map_err(TracingError::Otlp)
    }

    fn metadata(&self) -> Result<MetadataMap, TracingError> {
        let mut metadata = MetadataMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let key = MetadataKey::from_bytes(name.as_bytes())
                .map_err(|_| TracingError::InvalidHeader { name: name.clone() })?;
            let value = MetadataValue::try_from(value.as_str())
                .map_err(|_| TracingError::InvalidHeader { name: name.clone() })?;
            metadata.insert(key, value);
        }
        Ok(metadata)
    }
}
