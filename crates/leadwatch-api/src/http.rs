use leadwatch_core::error::{ApiError, ErrorBody};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Sends the request and decodes a JSON body, mapping failures onto `ApiError`.
/// Non-2xx responses keep the `detail`/`error` fields of their body.
pub async fn send_json<T>(builder: RequestBuilder) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = builder.send().await.map_err(transport_error)?;
    let response = check_status(response).await?;
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .bytes()
        .await
        .map(|bytes| ErrorBody::parse(&bytes))
        .unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Transport("Request timed out".to_string());
    }
    if err.is_connect() {
        return ApiError::Transport("Network Error".to_string());
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Transport(err.to_string())
}
