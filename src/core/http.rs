//! Thin JSON helpers over `gloo-net` for calls to the clinic backend.
//!
//! Paths are relative (`/api/...`); the server forwards them to the backend.
//! During server-side rendering no request is ever issued.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[cfg(not(feature = "ssr"))]
mod client {
    use gloo_net::http::{Request, RequestBuilder, Response};

    use super::*;
    use crate::core::error::ErrorBody;

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await
    }

    async fn send_with_body<B: Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let body = response.json::<ErrorBody>().await.ok();
        Err(ApiError::from_status(response.status(), body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        decode(send(Request::get(path)).await?).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(send_with_body(Request::post(path), body).await?).await
    }

    pub async fn post_ok<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), ApiError> {
        match body {
            Some(body) => send_with_body(Request::post(path), body).await?,
            None => send(Request::post(path)).await?,
        };
        Ok(())
    }

    pub async fn put_ok<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
        send_with_body(Request::put(path), body).await?;
        Ok(())
    }
}

#[cfg(feature = "ssr")]
mod client {
    use super::*;

    fn unavailable() -> ApiError {
        ApiError::Network("HTTP client is not available during server rendering".to_string())
    }

    pub async fn get_json<T: DeserializeOwned>(_path: &str) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn post_ok<B: Serialize>(_path: &str, _body: Option<&B>) -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn put_ok<B: Serialize>(_path: &str, _body: &B) -> Result<(), ApiError> {
        Err(unavailable())
    }
}

pub use client::{get_json, post_json, post_ok, put_ok};
