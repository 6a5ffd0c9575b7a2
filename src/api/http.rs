//! HTTP Transport
//!
//! Requests and responses are plain data: repositories build `HttpRequest`
//! values and parse `HttpResponse` values without touching the network, and
//! `execute` performs the single reqwest round-trip in between. Request
//! construction and status mapping stay testable without any I/O.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

/// An HTTP response reduced to what the repositories consume
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Map a response status to the error taxonomy: 404 means the record is
/// gone, 400/422 carry the server's validation message unchanged, any other
/// non-2xx status is unexpected.
pub fn map_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        400 | 422 => Err(ApiError::Validation(response.body.clone())),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Execute one request against the network. No retries, no timeout handling
/// — failures surface only through the returned error.
pub async fn execute(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let method = match request.method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    };

    let client = reqwest::Client::new();
    let mut builder = client.request(method, &request.url);
    if let Some(body) = request.body {
        builder = builder
            .header("content-type", "application/json")
            .body(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn success_statuses_pass_through() {
        assert!(map_status(&response(200, "")).is_ok());
        assert!(map_status(&response(201, "")).is_ok());
        assert!(map_status(&response(204, "")).is_ok());
    }

    #[test]
    fn missing_record_maps_to_not_found() {
        assert_eq!(map_status(&response(404, "")), Err(ApiError::NotFound));
    }

    #[test]
    fn rejected_payload_keeps_the_server_message() {
        assert_eq!(
            map_status(&response(422, "a list with this name already exists")),
            Err(ApiError::Validation(
                "a list with this name already exists".to_string()
            ))
        );
        assert!(matches!(
            map_status(&response(400, "bad request")),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn unexpected_statuses_carry_status_and_body() {
        assert_eq!(
            map_status(&response(500, "boom")),
            Err(ApiError::Http {
                status: 500,
                body: "boom".to_string()
            })
        );
    }
}
