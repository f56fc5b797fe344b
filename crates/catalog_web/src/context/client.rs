//! Client context for communicating with the backend.

use crate::{
    config::Config,
    error::{WebError, WebResult},
    storage::{LocalStorage, TokenStore},
    transport::{FetchTransport, HttpRequest, HttpResponse, Method, Transport},
};
use catalog_api::{request as req, resource::Resource, response as res, SIGN_IN_ENDPOINT};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};

type Listener = Arc<dyn Fn() + Send + Sync>;

pub struct ClientBuilder {
    config: Config,
    transport: Option<Arc<dyn Transport>>,
    store: Option<Arc<dyn TokenStore>>,
}

impl ClientBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            transport: None,
            store: None,
        }
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Defaults to `fetch` and browser local storage.
    pub fn build(self) -> Client {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(LocalStorage::new(self.config.token_key)));
        let transport = self.transport.unwrap_or_else(|| Arc::new(FetchTransport));
        Client {
            inner: Arc::new(Inner {
                config: self.config,
                transport,
                store,
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    config: Config,
    transport: Arc<dyn Transport>,
    store: Arc<dyn TokenStore>,
    listeners: RwLock<Vec<Listener>>,
}

/// Non-API methods
impl Client {
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Registers a callback for 401 responses. The token has already been
    /// cleared when it runs.
    pub fn on_unauthenticated(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.inner.store.load()
    }

    pub(crate) fn set_token(&self, token: &str) {
        self.inner.store.save(token);
    }

    pub(crate) fn clear_token(&self) {
        self.inner.store.clear();
    }

    fn notify_unauthenticated(&self) {
        let listeners = self
            .inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener();
        }
    }

    fn headers(&self, extra_headers: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in extra_headers {
            if name.eq_ignore_ascii_case("Authorization") {
                tracing::debug!("Ignoring caller supplied Authorization header");
                continue;
            }
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.to_string(), value.to_string()));
        }
        // read on every call, login and logout take effect immediately
        if let Some(token) = self.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }

    async fn send(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
        extra_headers: &[(&str, &str)],
    ) -> WebResult<Vec<u8>> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(WebError::new)?;
        let request = HttpRequest {
            method,
            url: format!("{}{endpoint}", self.inner.config.base_url),
            headers: self.headers(extra_headers),
            body,
        };
        tracing::trace!("{method} {}", request.url);
        let res = self.inner.transport.send(request).await?;
        self.assert_success(res)
    }

    fn assert_success(&self, res: HttpResponse) -> WebResult<Vec<u8>> {
        match res.status {
            100..=399 => Ok(res.body),
            401 => {
                tracing::warn!("Server returned 401, ending session");
                self.clear_token();
                self.notify_unauthenticated();
                Err(WebError::Unauthorized {
                    message: error_message(401, &res.body),
                })
            }
            status => Err(WebError::Status {
                status,
                message: error_message(status, &res.body),
            }),
        }
    }
}

/// API methods
impl Client {
    /// Sends a request and returns the response body as is.
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
        extra_headers: &[(&str, &str)],
    ) -> WebResult<Value> {
        let bytes = self.send(endpoint, method, body, extra_headers).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(WebError::decode)
    }

    /// Sends a request to an enveloped endpoint and returns its payload.
    ///
    /// A false success flag is an error even with a 2xx status, and so is a
    /// missing payload unless `T` accepts `null`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> WebResult<T> {
        let bytes = self.send(endpoint, method, body, &[]).await?;
        let envelope: res::Envelope =
            serde_json::from_slice(&bytes).map_err(WebError::decode)?;
        if !envelope.success {
            return Err(WebError::Rejected {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("{method} {endpoint} was not successful")),
            });
        }
        serde_json::from_value(envelope.data.unwrap_or(Value::Null)).map_err(WebError::decode)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> WebResult<res::LoginResponse> {
        tracing::info!("Signing in as {email}");

        let login = req::Login {
            email: email.into(),
            password: password.into(),
        };
        let json = serde_json::to_value(&login).map_err(WebError::new)?;
        let body = self
            .request(SIGN_IN_ENDPOINT, Method::Post, Some(&json), &[])
            .await?;
        let response: res::LoginResponse = decode_bare(body)?;

        tracing::info!("Signed in as {email}");
        Ok(response)
    }

    pub async fn profile(&self) -> WebResult<res::Profile> {
        tracing::info!("Fetching profile");

        let body = self
            .request(self.inner.config.profile_endpoint, Method::Get, None, &[])
            .await?;
        let profile: res::Profile = decode_bare(body)?;

        tracing::info!("Fetched profile: {profile:?}");
        Ok(profile)
    }

    pub async fn list<R: Resource>(&self) -> WebResult<Vec<R::Record>> {
        tracing::info!("Fetching {}", R::PLURAL);

        let records: Vec<R::Record> = self.call(&R::list_path(), Method::Get, None).await?;

        tracing::info!("Fetched {} {}", records.len(), R::PLURAL);
        Ok(records)
    }

    pub async fn create<R: Resource>(&self, form: &R::Form<'_>) -> WebResult<()> {
        tracing::info!("Creating {}", R::SINGULAR);

        let json = serde_json::to_value(form).map_err(WebError::new)?;
        let _: IgnoredAny = self
            .call(&R::create_path(), Method::Post, Some(&json))
            .await?;

        tracing::info!("Created {}", R::SINGULAR);
        Ok(())
    }

    pub async fn update<R: Resource>(&self, id: &str, form: &R::Form<'_>) -> WebResult<()> {
        tracing::info!("Updating {} {id}", R::SINGULAR);

        let json = serde_json::to_value(form).map_err(WebError::new)?;
        let _: IgnoredAny = self
            .call(&R::update_path(id), Method::Put, Some(&json))
            .await?;

        tracing::info!("Updated {} {id}", R::SINGULAR);
        Ok(())
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> WebResult<()> {
        tracing::info!("Deleting {} {id}", R::SINGULAR);

        let _: IgnoredAny = self.call(&R::delete_path(id), Method::Delete, None).await?;

        tracing::info!("Deleted {} {id}", R::SINGULAR);
        Ok(())
    }
}

/// `message` field of a JSON body, else the raw body, else the status.
fn error_message(status: u16, body: &[u8]) -> String {
    if let Ok(error) = serde_json::from_slice::<res::Error>(body) {
        return error.message;
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        text.to_string()
    }
}

/// Auth endpoints answer without an envelope, but may still carry a flag.
fn decode_bare<T: DeserializeOwned>(body: Value) -> WebResult<T> {
    if res::success_flag(&body) == Some(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request was not successful")
            .to_string();
        return Err(WebError::Rejected { message });
    }
    serde_json::from_value(body).map_err(WebError::decode)
}
