use opentelemetry_stackdriver::{GcpAuthorizer, StackDriverExporter};
use serde::Deserialize;

use crate::backend::SpanExporter;
use crate::error::TracingError;

/// Google Cloud Trace to export spans to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stackdriver {
    /// GCP project id.
    pub project_id: String,
}

impl Stackdriver {
    /// Identifies whether a project id has been set.
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty()
    }

    /// Build a Cloud Trace exporter authenticated through application
    /// default credentials.
    ///
    /// The exporter's driver runs as a background task on the current Tokio
    /// runtime. The target project comes from the credentials; `project_id`
    /// gates backend selection and is recorded on the resource.
    pub async fn exporter(&self) -> Result<SpanExporter, TracingError> {
        let authorizer = GcpAuthorizer::new()
            .await
            .map_err(|err| TracingError::GcpAuth(err.to_string()))?;

        let (exporter, driver) = StackDriverExporter::builder()
            .build(authorizer)
            .await
            .map_err(|err| TracingError::Stackdriver(err.to_string()))?;
        tokio::spawn(driver);

        Ok(SpanExporter::Stackdriver(exporter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_by_project_id() {
        assert!(!Stackdriver::default().is_configured());

        let stackdriver = Stackdriver {
            project_id: "builds-123".to_string(),
        };
        assert!(stackdriver.is_configured());
    }
}
