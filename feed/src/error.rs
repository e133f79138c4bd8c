use shared::models::ChartKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP client setup error: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for {kind} chart data failed: {source}")]
    Request {
        kind: ChartKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind} chart endpoint returned HTTP {status}")]
    Status { kind: ChartKind, status: u16 },

    #[error("{kind} chart response body is not valid JSON: {source}")]
    Body {
        kind: ChartKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind} chart response has an unexpected shape: {source}")]
    Decode {
        kind: ChartKind,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FeedError::Status {
            kind: ChartKind::Bar,
            status: 503,
        };
        assert_eq!(err.to_string(), "bar chart endpoint returned HTTP 503");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = FeedError::Decode { kind: ChartKind::Line, source };
        assert!(err.to_string().starts_with("line chart response has an unexpected shape"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
