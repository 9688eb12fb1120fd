use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::backend::{Otlp, SpanExporter};
use crate::error::TracingError;

/// Honeycomb's OTLP endpoint.
const HONEYCOMB_ADDRESS: &str = "api.honeycomb.io:443";

/// honeycomb.io dataset to export spans to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Honeycomb {
    /// honeycomb.io api key.
    pub api_key: SecretString,
    /// honeycomb.io dataset name.
    pub dataset: String,
}

impl Default for Honeycomb {
    fn default() -> Self {
        Self {
            api_key: SecretString::new(String::new()),
            dataset: String::new(),
        }
    }
}

impl Honeycomb {
    /// Identifies whether both an api key and a dataset have been set.
    pub fn is_configured(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.dataset.is_empty()
    }

    /// Honeycomb speaks OTLP; the exporter is the OTLP one pointed at their
    /// API with team/dataset headers.
    pub fn exporter(&self) -> Result<SpanExporter, TracingError> {
        self.otlp().exporter()
    }

    fn otlp(&self) -> Otlp {
        Otlp {
            address: HONEYCOMB_ADDRESS.to_string(),
            headers: HashMap::from([
                (
                    "x-honeycomb-team".to_string(),
                    self.api_key.expose_secret().clone(),
                ),
                ("x-honeycomb-dataset".to_string(), self.dataset.clone()),
            ]),
            use_tls: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn honeycomb() -> Honeycomb {
        Honeycomb {
            api_key: SecretString::new("hc-key".to_string()),
            dataset: "builds".to_string(),
        }
    }

    #[test]
    fn test_configured_needs_key_and_dataset() {
        assert!(!Honeycomb::default().is_configured());

        let missing_dataset = Honeycomb {
            dataset: String::new(),
            ..honeycomb()
        };
        assert!(!missing_dataset.is_configured());

        let missing_key = Honeycomb {
            api_key: SecretString::new(String::new()),
            ..honeycomb()
        };
        assert!(!missing_key.is_configured());

        assert!(honeycomb().is_configured());
    }

    #[test]
    fn test_delegates_to_otlp_over_tls() {
        let otlp = honeycomb().otlp();

        assert_eq!(otlp.address, HONEYCOMB_ADDRESS);
        assert!(otlp.use_tls);
        assert_eq!(otlp.headers.get("x-honeycomb-team").unwrap(), "hc-key");
        assert_eq!(otlp.headers.get("x-honeycomb-dataset").unwrap(), "builds");
    }

    #[test]
    fn test_api_key_is_redacted_in_debug_output() {
        let debugged = format!("{:?}", honeycomb());
        assert!(!debugged.contains("hc-key"));
    }
}
