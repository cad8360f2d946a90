use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;

use crate::api::params::QueryParams;
use crate::credentials::ApiCredential;

pub const VERACODE_API_URL: &str = "https://analysiscenter.veracode.com/api/5.0";

pub struct ApiClient {
    pub base_url: String,
    pub credential: ApiCredential,
    pub http: Client,
}

impl ApiClient {
    pub fn new(credential: ApiCredential) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(1800)) // 30 min for large uploads
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: VERACODE_API_URL.to_string(),
            credential,
            http,
        })
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Send one request for `operation` and surface the raw response body.
    ///
    /// Every HTTP status counts as a completed call: the body is printed to
    /// stdout verbatim and returned. Only transport failures are errors.
    pub fn submit(&self, operation: &str, params: &QueryParams) -> Result<String> {
        let url = format!("{}/{}", self.base_url, operation);
        debug!(url = %url, params = ?params, "dispatching request");

        let mut request = self
            .http
            .post(&url)
            .basic_auth(&self.credential.username, Some(&self.credential.password));
        if !params.is_empty() {
            request = request.query(params.as_slice());
        }

        let response = request
            .send()
            .with_context(|| format!("Request to {} failed", operation))?;
        debug!(status = %response.status(), "response received");

        let body = response
            .text()
            .with_context(|| format!("Failed to read {} response body", operation))?;
        println!("{}", body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_credential() -> ApiCredential {
        ApiCredential {
            username: "jane".to_string(),
            password: "secret".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(test_credential())
            .unwrap()
            .with_base_url(&server.uri())
    }

    #[test]
    fn no_params_means_no_query_string() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/getapplist.do"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<applist/>"))
                .mount(&server)
                .await;
            server
        });

        let body = client_for(&server)
            .submit("getapplist.do", &QueryParams::new())
            .unwrap();
        assert_eq!(body, "<applist/>");

        let requests = rt.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), None);
    }

    #[test]
    fn params_travel_as_query_string_with_basic_auth() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/beginscan.do"))
                .and(query_param("app_id", "1234"))
                .and(query_param("modules", "core.jar, web.war"))
                .and(header("Authorization", "Basic amFuZTpzZWNyZXQ="))
                .respond_with(ResponseTemplate::new(200).set_body_string("<buildinfo/>"))
                .mount(&server)
                .await;
            server
        });

        let mut params = QueryParams::new();
        params.push("app_id", "1234");
        params.push_list("modules", &["core.jar".to_string(), "web.war".to_string()]);

        let body = client_for(&server).submit("beginscan.do", &params).unwrap();
        assert_eq!(body, "<buildinfo/>");
    }

    #[test]
    fn non_success_statuses_still_yield_the_body() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/deletebuild.do"))
                .respond_with(
                    ResponseTemplate::new(500).set_body_string("<error>Access denied</error>"),
                )
                .mount(&server)
                .await;
            server
        });

        let mut params = QueryParams::new();
        params.push("app_id", "1234");

        let body = client_for(&server).submit("deletebuild.do", &params).unwrap();
        assert_eq!(body, "<error>Access denied</error>");
    }

    #[test]
    fn transport_failures_are_errors() {
        // Nothing listens on this port.
        let client = ApiClient::new(test_credential())
            .unwrap()
            .with_base_url("http://127.0.0.1:9");

        let result = client.submit("getapplist.do", &QueryParams::new());
        assert!(result.is_err());
    }
}
