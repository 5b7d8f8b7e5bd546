//! Contacts backend HTTP client
//!
//! Talks JSON to the contacts REST API:
//!
//! - `POST   /api/v1/adicionar_contato`
//! - `GET    /api/v1/listar_contatos`
//! - `DELETE /api/v1/remover_contato`
//! - `PUT    /api/v1/editar_contato`
//!
//! Bodies are parsed whatever the HTTP status line says; the backend signals
//! create success in the body itself.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::Contact;
use crate::ports::{ContactRepository, CreateContactResponse};

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const CREATE_PATH: &str = "api/v1/adicionar_contato";
const LIST_PATH: &str = "api/v1/listar_contatos";
const DELETE_PATH: &str = "api/v1/remover_contato";
const UPDATE_PATH: &str = "api/v1/editar_contato";

/// HTTP implementation of [`ContactRepository`]
#[derive(Debug, Clone)]
pub struct HttpContactClient {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl HttpContactClient {
    /// Create a client for the backend at `base_url`
    ///
    /// Only http and https URLs are accepted. No timeout is applied unless
    /// one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Backend base URL (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(format!("Invalid endpoint {}: {}", path, e)))
    }

    async fn send(&self, method: Method, path: &str, body: Option<JsonValue>) -> Result<Response> {
        let url = self.endpoint(path)?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            // .json() also sets Content-Type: application/json
            request = request.json(&body);
        }
        request.send().await.map_err(|e| self.map_request_error(e))
    }

    async fn parse<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| Error::api(format!("Failed to parse {} response: {}", operation, e)))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            match self.timeout {
                Some(t) => Error::http(format!("Connection timed out after {:?}", t)),
                None => Error::http("Connection timed out"),
            }
        } else if error.is_connect() {
            Error::http(format!("Unable to connect to contacts backend at {}", self.base_url))
        } else {
            Error::http(format!("Contacts request failed: {}", error))
        }
    }
}

#[async_trait]
impl ContactRepository for HttpContactClient {
    async fn create(&self, telefone: &str, nome: &str) -> Result<CreateContactResponse> {
        let body = json!({ "telefone": telefone, "nome": nome });
        let response = self.send(Method::POST, CREATE_PATH, Some(body)).await?;
        Self::parse(response, "create").await
    }

    async fn list(&self) -> Result<Vec<Contact>> {
        let response = self.send(Method::GET, LIST_PATH, None).await?;
        Self::parse(response, "list").await
    }

    async fn delete(&self, telefone: &str) -> Result<JsonValue> {
        let body = json!({ "telefone": telefone });
        let response = self.send(Method::DELETE, DELETE_PATH, Some(body)).await?;
        Self::parse(response, "delete").await
    }

    async fn update(&self, telefone: &str, nome: &str) -> Result<JsonValue> {
        let body = json!({ "telefone": telefone, "nome": nome });
        let response = self.send(Method::PUT, UPDATE_PATH, Some(body)).await?;
        Self::parse(response, "update").await
    }
}

/// Parse and normalize a backend base URL
///
/// The path gets a trailing slash so relative endpoints join below it
/// instead of replacing its last segment.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut parsed =
        Url::parse(base_url).map_err(|e| Error::config(format!("Invalid backend URL: {}", e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::config("Backend URL must use http or https"));
    }

    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }

    Ok(parsed)
}
