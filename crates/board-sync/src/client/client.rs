use crate::client::envelope::{decode_content, error_message};
use crate::{BoardApi, SyncError, SyncResult, TaskListUpdate};

use board_config::ApiConfig;
use board_core::{Project, ProjectId, TaskId};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};

/// HTTP client for the board REST API
pub struct Client {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client with reqwest defaults
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000/api")
    /// * `token` - Optional bearer token sent with every request
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout
    pub fn from_config(config: &ApiConfig) -> SyncResult<Self> {
        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            client,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build a request with the bearer credential, if any
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request, map error statuses and return the raw body
    async fn execute(&self, req: reqwest::RequestBuilder) -> SyncResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if status.is_success() {
            return Ok(body);
        }

        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Something wrong happened!")
                .to_string()
        });

        Err(match status {
            StatusCode::UNAUTHORIZED => SyncError::unauthorized(message),
            StatusCode::NOT_FOUND => SyncError::not_found(message),
            _ => SyncError::api(status.as_u16(), message),
        })
    }
}

#[async_trait]
impl BoardApi for Client {
    async fn fetch_project(&self, project_id: &ProjectId) -> SyncResult<Project> {
        debug!("GET /projects/{}", project_id);
        let req = self.request(Method::GET, &format!("/projects/{}", project_id));
        let body = self.execute(req).await?;
        decode_content(&body)
    }

    async fn update_task_list(&self, task_id: &TaskId, update: &TaskListUpdate) -> SyncResult<()> {
        debug!(
            "PATCH /tasks/{}/update-list list={} index={}",
            task_id, update.list_id, update.index_number
        );
        let req = self
            .request(Method::PATCH, &format!("/tasks/{}/update-list", task_id))
            .json(update);
        self.execute(req).await?;
        Ok(())
    }
}
