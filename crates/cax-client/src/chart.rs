//! Chart image endpoints.
//!
//! `GET /api/chart/{document,normalize,fraud}` returns an image resource the
//! client renders (or saves) as-is. URL construction is pure and separated
//! from fetching so it can be unit-tested.

use std::fmt;

use crate::{ApiClient, ClientError};

/// Which chart variant to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Document,
    Normalize,
    Fraud,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Normalize => "normalize",
            Self::Fraud => "fraud",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a chart URL from an origin, kind, and query parameters.
///
/// Parameter values are percent-encoded; keys are passed through (they are
/// fixed identifiers, never user input).
#[must_use]
pub fn chart_url(origin: &str, kind: ChartKind, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/api/chart/{}", origin.trim_end_matches('/'), kind);
    for (i, (key, value)) in params.iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

impl ApiClient {
    /// URL for the document-classification chart.
    #[must_use]
    pub fn document_chart_url(&self, confidence_pct: u8, health: u8) -> String {
        chart_url(
            self.base_url(),
            ChartKind::Document,
            &[
                ("confidence", confidence_pct.to_string()),
                ("health", health.to_string()),
            ],
        )
    }

    /// URL for the normalization chart, annotated with the claim severity.
    #[must_use]
    pub fn normalize_chart_url(&self, severity: &str) -> String {
        chart_url(
            self.base_url(),
            ChartKind::Normalize,
            &[("severity", severity.to_string())],
        )
    }

    /// URL for the fraud-risk chart.
    #[must_use]
    pub fn fraud_chart_url(&self, score: &str, level: &str) -> String {
        chart_url(
            self.base_url(),
            ChartKind::Fraud,
            &[("score", score.to_string()), ("level", level.to_string())],
        )
    }

    /// Fetch a chart image. No auth; the bytes are returned unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn fetch_chart(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        self.get_bytes(url).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn document_chart_url_carries_confidence_and_health() {
        let url = chart_url(
            "http://localhost:8000",
            ChartKind::Document,
            &[
                ("confidence", "88".to_string()),
                ("health", "78".to_string()),
            ],
        );
        assert_eq!(
            url,
            "http://localhost:8000/api/chart/document?confidence=88&health=78"
        );
    }

    #[test]
    fn severity_values_are_percent_encoded() {
        let url = chart_url(
            "http://localhost:8000",
            ChartKind::Normalize,
            &[("severity", "Flood / Water Damage".to_string())],
        );
        assert_eq!(
            url,
            "http://localhost:8000/api/chart/normalize?severity=Flood%20%2F%20Water%20Damage"
        );
    }

    #[test]
    fn no_params_means_no_query_string() {
        let url = chart_url("http://localhost:8000/", ChartKind::Fraud, &[]);
        assert_eq!(url, "http://localhost:8000/api/chart/fraud");
    }
}
