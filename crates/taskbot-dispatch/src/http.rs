//! Reqwest implementation of the task API port.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{ApiError, ApiResult, TaskApi};
use crate::config::DispatchConfig;
use crate::models::{CompleteTask, CreateTask, TaskDto, UpdateTask};

/// Production task API client over reqwest.
///
/// Carries the configured request timeout; no retries — the dispatcher
/// reports failures to the operator immediately.
pub struct HttpTaskClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTaskClient {
    /// Create a client from the dispatcher configuration.
    pub fn new(config: &DispatchConfig) -> ApiResult<Self> {
        // `Url::join` drops the last path segment without the slash.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn item_url(&self, task_id: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(task_id)?)
    }

    fn list_url(&self, page: Option<&str>, page_size: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        let params: Vec<(&str, &str)> = [("page", page), ("page_size", page_size)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        // Touching query_pairs_mut with nothing to add leaves a bare '?'
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }
}

/// Map a response status onto the error taxonomy.
fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound { url });
    }
    Err(ApiError::Status {
        status: status.as_u16(),
        url,
    })
}

/// Decode a success body; a 2xx with a broken body is not a transport
/// failure.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl TaskApi for HttpTaskClient {
    async fn create(&self, task: &CreateTask) -> ApiResult<TaskDto> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(task)
            .send()
            .await?;
        decode(check(response)?).await
    }

    async fn list(&self, page: Option<&str>, page_size: Option<&str>) -> ApiResult<Vec<TaskDto>> {
        let response = self
            .client
            .get(self.list_url(page, page_size))
            .send()
            .await?;
        decode(check(response)?).await
    }

    async fn retrieve(&self, task_id: &str) -> ApiResult<TaskDto> {
        let response = self.client.get(self.item_url(task_id)?).send().await?;
        decode(check(response)?).await
    }

    async fn update(&self, task_id: &str, update: &UpdateTask) -> ApiResult<TaskDto> {
        let response = self
            .client
            .put(self.item_url(task_id)?)
            .json(update)
            .send()
            .await?;
        decode(check(response)?).await
    }

    async fn complete(&self, task_id: &str) -> ApiResult<TaskDto> {
        let response = self
            .client
            .patch(self.item_url(task_id)?)
            .json(&CompleteTask { is_complete: true })
            .send()
            .await?;
        decode(check(response)?).await
    }

    async fn delete(&self, task_id: &str) -> ApiResult<()> {
        let response = self.client.delete(self.item_url(task_id)?).send().await?;
        check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpTaskClient {
        HttpTaskClient::new(&DispatchConfig::new().with_base_url(base)).unwrap()
    }

    #[test]
    fn item_url_appends_the_raw_token() {
        let client = client("http://127.0.0.1:8000/tasks/");
        let url = client.item_url("7").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/tasks/7");
    }

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let client = client("http://127.0.0.1:8000/tasks");
        let url = client.item_url("7").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/tasks/7");
    }

    #[test]
    fn list_url_omits_absent_params() {
        let client = client("http://127.0.0.1:8000/tasks/");
        assert_eq!(
            client.list_url(None, None).as_str(),
            "http://127.0.0.1:8000/tasks/"
        );
        assert_eq!(
            client.list_url(Some("2"), None).as_str(),
            "http://127.0.0.1:8000/tasks/?page=2"
        );
        assert_eq!(
            client.list_url(Some("2"), Some("5")).as_str(),
            "http://127.0.0.1:8000/tasks/?page=2&page_size=5"
        );
    }

    #[test]
    fn non_numeric_tokens_pass_through() {
        // The service, not the client, rejects a malformed id.
        let client = client("http://127.0.0.1:8000/tasks/");
        let url = client.item_url("abc").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/tasks/abc");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let result = HttpTaskClient::new(&DispatchConfig::new().with_base_url("not a url"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
