use std::borrow::Cow;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Everything needed to (re)send one logical call. Bodies are owned so the
/// request can be replayed after a token refresh.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: RequestBody,
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Bytes(Vec<u8>),
    Multipart(Vec<MultipartPart>),
}

#[derive(Debug, Clone)]
pub enum MultipartPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        data: Vec<u8>,
    },
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn query_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ApiError::InvalidRequest(format!("failed to encode body: {err}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    #[must_use]
    pub fn json_value(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    #[must_use]
    pub fn bytes(mut self, body: Vec<u8>) -> Self {
        self.body = RequestBody::Bytes(body);
        self
    }

    #[must_use]
    pub fn multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Per-call header; a `Content-Type` set here replaces the JSON default.
    pub fn header(mut self, name: HeaderName, value: &str) -> Result<Self, ApiError> {
        let value = HeaderValue::from_str(value)
            .map_err(|err| ApiError::InvalidRequest(format!("invalid {name} header: {err}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Headers sent on every attempt, before authorization is added.
    pub(crate) fn outbound_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let multipart = matches!(self.body, RequestBody::Multipart(_));
        if !multipart {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in &self.headers {
            // the transport writes the multipart boundary itself
            if multipart && name == CONTENT_TYPE {
                continue;
            }
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    pub(crate) fn apply_body(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        Ok(match &self.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(value).map_err(|err| {
                    ApiError::InvalidRequest(format!("failed to encode body: {err}"))
                })?;
                builder.body(bytes)
            }
            RequestBody::Bytes(bytes) => builder.body(bytes.clone()),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        })
    }
}

fn build_form(parts: &[MultipartPart]) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            MultipartPart::Text { name, value } => form.text(name.clone(), value.clone()),
            MultipartPart::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                let mut file = Part::bytes(data.clone()).file_name(file_name.clone());
                if let Some(content_type) = content_type.as_deref() {
                    file = file.mime_str(content_type).map_err(|err| {
                        ApiError::InvalidRequest(format!("invalid content type: {err}"))
                    })?;
                }
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, ApiError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Non-2xx answers become [`ApiError::Status`].
    pub(crate) fn into_result(self) -> Result<Self, ApiError> {
        if self.status.is_success() {
            return Ok(self);
        }
        Err(ApiError::Status {
            status: self.status,
            body: self.text().into_owned(),
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_default_content_type() {
        let request = ApiRequest::post("books/")
            .json(&serde_json::json!({ "title": "Kindred" }))
            .expect("encode");
        let headers = request.outbound_headers();
        assert_eq!(
            headers.get(CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some(&b"application/json"[..])
        );
    }

    #[test]
    fn content_type_can_be_overridden() {
        let request = ApiRequest::post("import/")
            .bytes(b"title,pages".to_vec())
            .header(CONTENT_TYPE, "text/csv")
            .expect("header");
        let headers = request.outbound_headers();
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(
            headers.get(CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some(&b"text/csv"[..])
        );
    }

    #[test]
    fn multipart_leaves_content_type_to_transport() {
        let request = ApiRequest::patch("profile/")
            .multipart(vec![MultipartPart::Text {
                name: "bio".to_string(),
                value: "hello".to_string(),
            }])
            .header(CONTENT_TYPE, "multipart/form-data")
            .expect("header");
        assert!(request.outbound_headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn optional_query_pairs_are_skipped() {
        let request = ApiRequest::get("books/")
            .query_opt("author", Some(3))
            .query_opt::<String>("search", None);
        assert_eq!(
            request.query_pairs(),
            &[("author".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn error_status_keeps_body() {
        let response = ApiResponse {
            status: StatusCode::BAD_REQUEST,
            headers: HeaderMap::new(),
            body: br#"{"error":"pages_read required"}"#.to_vec(),
        };
        match response.into_result() {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert!(body.contains("pages_read"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
