//! HTTP client for the sales backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side and
//! native: stubs returning a transport error, since the endpoints are only
//! meaningful in the browser.
//!
//! Every outgoing request carries the stored token as a bearer credential
//! when one exists; requests go out bare otherwise and the backend rejects
//! them. A 401 on any call triggers the global invalidation — durable
//! session storage is cleared and the host-supplied `on_unauthorized`
//! callback fires — because an expired or revoked token invalidates the
//! whole session, not just one request. The failing call still surfaces
//! [`ApiError::Unauthorized`] to its own caller.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged for diagnostics and returned unchanged; nothing is
//! swallowed and nothing retries automatically. Callers that want a retry
//! re-invoke the operation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use thiserror::Error;

use crate::net::types::{Analytics, Sale, SaleDraft, SaleUpdate};
use crate::util::storage::SessionStore;

/// Default location of the sales collection, relative to the page origin.
pub const DEFAULT_BASE_URL: &str = "/api/sales";

/// Login endpoint of the external auth backend.
const LOGIN_URL: &str = "/api/auth/login";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("authentication rejected")]
    Unauthorized,
    #[error("server returned status {code}")]
    Status { code: u16 },
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Client over the sales collection.
///
/// Cloning is cheap; clones share the session store and the unauthorized
/// callback. The callback is supplied by the hosting application so
/// transport code never touches navigation directly.
#[derive(Clone)]
pub struct SalesClient {
    base_url: String,
    store: SessionStore,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl SalesClient {
    #[must_use]
    pub fn new(store: SessionStore, on_unauthorized: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, store, on_unauthorized)
    }

    #[must_use]
    pub fn with_base_url(
        base_url: &str,
        store: SessionStore,
        on_unauthorized: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            store,
            on_unauthorized,
        }
    }

    /// `Authorization` header value for the stored credential, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.store.token().map(|token| format!("Bearer {token}"))
    }

    /// Fetch every sale record: `GET /`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        let url = self.endpoint("");
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send("list_sales", self.authed(gloo_net::http::Request::get(&url))).await?;
            self.parse("list_sales", resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(not_in_browser())
        }
    }

    /// Fetch the aggregate analytics object: `GET /analytics`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn fetch_analytics(&self) -> Result<Analytics, ApiError> {
        let url = self.endpoint("/analytics");
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send("fetch_analytics", self.authed(gloo_net::http::Request::get(&url)))
                .await?;
            self.parse("fetch_analytics", resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(not_in_browser())
        }
    }

    /// Create a sale: `POST /`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn create_sale(&self, draft: &SaleDraft) -> Result<Sale, ApiError> {
        let url = self.endpoint("");
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authed(gloo_net::http::Request::post(&url))
                .json(draft)
                .map_err(|e| transport("create_sale", &e))?;
            let resp = self.send_built("create_sale", request).await?;
            self.parse("create_sale", resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, draft);
            Err(not_in_browser())
        }
    }

    /// Partially update a sale: `PUT /{id}`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn update_sale(&self, id: &str, patch: &SaleUpdate) -> Result<Sale, ApiError> {
        let url = self.endpoint(&format!("/{id}"));
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authed(gloo_net::http::Request::put(&url))
                .json(patch)
                .map_err(|e| transport("update_sale", &e))?;
            let resp = self.send_built("update_sale", request).await?;
            self.parse("update_sale", resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, patch);
            Err(not_in_browser())
        }
    }

    /// Advance a sale's fulfillment stage: `PATCH /{id}/decstatus`.
    ///
    /// One-way status advance with a fixed body, not a general setter.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn advance_dec_status(&self, id: &str) -> Result<Sale, ApiError> {
        let url = self.endpoint(&format!("/{id}/decstatus"));
        let body = dec_status_body();
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .authed(gloo_net::http::Request::patch(&url))
                .json(&body)
                .map_err(|e| transport("advance_dec_status", &e))?;
            let resp = self.send_built("advance_dec_status", request).await?;
            self.parse("advance_dec_status", resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(not_in_browser())
        }
    }

    /// Delete a sale: `DELETE /{id}`. No content comes back.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn delete_sale(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/{id}"));
        #[cfg(feature = "hydrate")]
        {
            self.send("delete_sale", self.authed(gloo_net::http::Request::delete(&url)))
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(not_in_browser())
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Global reaction to an authentication rejection.
    ///
    /// Clearing an already-clear session is a no-op, and the redirect
    /// callback fires only when this call actually invalidated a token, so
    /// concurrent rejections end in the same state as a single one.
    pub fn handle_unauthorized(&self) {
        if self.store.clear() {
            (self.on_unauthorized)();
        }
    }

    #[cfg(feature = "hydrate")]
    fn authed(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        op: &str,
        builder: gloo_net::http::RequestBuilder,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let resp = builder.send().await.map_err(|e| transport(op, &e))?;
        self.check(op, &resp)?;
        Ok(resp)
    }

    #[cfg(feature = "hydrate")]
    async fn send_built(
        &self,
        op: &str,
        request: gloo_net::http::Request,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let resp = request.send().await.map_err(|e| transport(op, &e))?;
        self.check(op, &resp)?;
        Ok(resp)
    }

    #[cfg(feature = "hydrate")]
    fn check(&self, op: &str, resp: &gloo_net::http::Response) -> Result<(), ApiError> {
        if resp.status() == 401 {
            leptos::logging::warn!("{op}: authentication rejected, clearing session");
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let err = ApiError::Status { code: resp.status() };
            leptos::logging::warn!("{op}: {err}");
            return Err(err);
        }
        Ok(())
    }

    #[cfg(feature = "hydrate")]
    async fn parse<T: serde::de::DeserializeOwned>(
        &self,
        op: &str,
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| {
            leptos::logging::warn!("{op}: malformed response body: {e}");
            ApiError::Decode(e.to_string())
        })
    }
}

/// Exchange credentials for a token at the external auth backend.
///
/// A 401 here means bad credentials, not an expired session, so no
/// session-clearing side effect fires.
///
/// # Errors
///
/// Returns the transport, status, or decode failure unchanged.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let url = LOGIN_URL;
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct LoginResponse {
            token: String,
        }
        let resp = gloo_net::http::Request::post(url)
            .json(&LoginRequest { email, password })
            .map_err(|e| transport("login", &e))?
            .send()
            .await
            .map_err(|e| transport("login", &e))?;
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let err = ApiError::Status { code: resp.status() };
            leptos::logging::warn!("login: {err}");
            return Err(err);
        }
        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, email, password);
        Err(not_in_browser())
    }
}

/// Fixed body of the status-advance call.
fn dec_status_body() -> serde_json::Value {
    serde_json::json!({ "decStatus": 2 })
}

#[cfg(feature = "hydrate")]
fn transport(op: &str, err: &gloo_net::Error) -> ApiError {
    leptos::logging::warn!("{op}: {err}");
    ApiError::Transport(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}
