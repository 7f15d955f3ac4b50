//! Conversions from external infrastructure errors into domain errors.

use genieflow_domain::GenieFlowError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GenieFlowError);

impl From<InfraError> for GenieFlowError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GenieFlowError> for InfraError {
    fn from(value: GenieFlowError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGenieFlowError {
    fn into_genieflow(self) -> GenieFlowError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GenieFlowError */
/* -------------------------------------------------------------------------- */

impl IntoGenieFlowError for HttpError {
    fn into_genieflow(self) -> GenieFlowError {
        if self.is_timeout() {
            return GenieFlowError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return GenieFlowError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return GenieFlowError::InvalidInput(format!("failed to decode HTTP body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let message = format!("HTTP {code} {reason}");

            return match code {
                401 | 403 => GenieFlowError::Auth(message),
                404 => GenieFlowError::NotFound(message),
                429 => GenieFlowError::RateLimited(message),
                _ => GenieFlowError::Network(message),
            };
        }

        GenieFlowError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_genieflow())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → GenieFlowError */
/* -------------------------------------------------------------------------- */

impl IntoGenieFlowError for JsonError {
    fn into_genieflow(self) -> GenieFlowError {
        GenieFlowError::InvalidInput(format!(
            "malformed JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_genieflow())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → GenieFlowError */
/* -------------------------------------------------------------------------- */

impl IntoGenieFlowError for UrlError {
    fn into_genieflow(self) -> GenieFlowError {
        GenieFlowError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        Self(value.into_genieflow())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let mapped: GenieFlowError =
            InfraError::from(status_error(StatusCode::UNAUTHORIZED).await).into();
        match mapped {
            GenieFlowError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_429_maps_to_rate_limited() {
        let mapped: GenieFlowError =
            InfraError::from(status_error(StatusCode::TOO_MANY_REQUESTS).await).into();
        assert!(mapped.is_rate_limited(), "got {mapped:?}");
    }

    #[test]
    fn json_errors_are_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let mapped: GenieFlowError = InfraError::from(err).into();
        match mapped {
            GenieFlowError::InvalidInput(msg) => assert!(msg.contains("line 1")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn url_errors_are_config_errors() {
        let err = url::Url::parse("not a url").unwrap_err();
        let mapped: GenieFlowError = InfraError::from(err).into();
        assert!(matches!(mapped, GenieFlowError::Config(_)));
    }
}
