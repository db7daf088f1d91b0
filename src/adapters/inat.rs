use crate::domain::model::ObservationPage;
use crate::domain::ports::ObservationSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.inaturalist.org/v1/observations";
pub const MO_URL_FIELD: &str = "field:Mushroom Observer URL";

/// iNaturalist observations endpoint, filtered on the "Mushroom Observer URL"
/// observation field.
#[derive(Debug, Clone)]
pub struct InatClient {
    client: Client,
    endpoint: String,
}

impl InatClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn query_params(mo_url: &str) -> [(&'static str, &str); 2] {
        [(MO_URL_FIELD, mo_url), ("verifiable", "any")]
    }
}

#[async_trait]
impl ObservationSource for InatClient {
    async fn observations_by_mo_url(&self, mo_url: &str) -> Result<ObservationPage> {
        let params = Self::query_params(mo_url);

        tracing::debug!("Request: GET {}", self.endpoint);
        tracing::debug!("Mushroom Observer URL: {}", mo_url);
        tracing::debug!("Parameters: {:?}", params);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        tracing::debug!("Response headers: {:?}", response.headers());

        let response = response.error_for_status()?;
        let body = response.text().await?;
        tracing::debug!("Response body: {}", body);

        let page: ObservationPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MotoinatError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_sends_custom_field_filter() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/observations")
                .query_param(MO_URL_FIELD, "https://mushroomobserver.org/obs/42")
                .query_param("verifiable", "any")
                .header("user-agent", "motoinat-test");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "total_results": 1,
                    "page": 1,
                    "per_page": 30,
                    "results": [{"id": 987, "species_guess": "Morchella", "place_guess": null}]
                }));
        });

        let client = InatClient::new(server.url("/v1/observations"), "motoinat-test").unwrap();
        let page = client
            .observations_by_mo_url("https://mushroomobserver.org/obs/42")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(page.total_results, 1);
        assert_eq!(page.results[0].id, 987);
        assert_eq!(page.results[0].species_guess.as_deref(), Some("Morchella"));
        assert_eq!(page.results[0].place_guess, None);
    }

    #[tokio::test]
    async fn test_server_error_is_an_api_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/observations");
            then.status(500);
        });

        let client = InatClient::new(server.url("/v1/observations"), "motoinat-test").unwrap();
        let result = client.observations_by_mo_url("http://mushroomobserver.org/1").await;

        api_mock.assert();
        assert!(matches!(result, Err(MotoinatError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/observations");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = InatClient::new(server.url("/v1/observations"), "motoinat-test").unwrap();
        let result = client.observations_by_mo_url("http://mushroomobserver.org/1").await;

        assert!(matches!(result, Err(MotoinatError::SerializationError(_))));
    }
}
