//! Request descriptor types

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// HTTP methods a scenario task may issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Get the string representation of the HTTP method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = HttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(HttpMethodError::InvalidMethod(s.to_string())),
        }
    }
}

/// Errors that can occur when parsing HTTP methods
#[derive(Error, Debug, Clone)]
pub enum HttpMethodError {
    #[error("Invalid HTTP method: '{0}'. Supported methods are: GET, POST, PUT, PATCH, DELETE")]
    InvalidMethod(String),
}

/// Body of a request descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "encoding", content = "payload", rename_all = "lowercase")]
pub enum RequestBody {
    /// No body at all
    #[default]
    None,
    /// Serialized as JSON with `application/json`
    Json(JsonValue),
    /// Sent verbatim as `text/plain`
    Text(String),
}

impl RequestBody {
    /// Content type matching the body encoding, if any
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::None => None,
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Text(_) => Some("text/plain"),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, RequestBody::None)
    }

    /// Wire form of the body
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            RequestBody::None => Ok(Vec::new()),
            RequestBody::Json(value) => serde_json::to_vec(value),
            RequestBody::Text(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

/// One HTTP request produced by a task invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub path: String,
    #[serde(default, skip_serializing_if = "RequestBody::is_none")]
    pub body: RequestBody,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }
}

impl fmt::Display for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_from_str() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("TRACE".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(format!("{}", HttpMethod::Get), "GET");
        assert_eq!(format!("{}", HttpMethod::Delete), "DELETE");
    }

    #[test]
    fn test_body_content_type() {
        assert_eq!(RequestBody::None.content_type(), None);
        assert_eq!(
            RequestBody::Json(json!({"url": "x"})).content_type(),
            Some("application/json")
        );
        assert_eq!(
            RequestBody::Text("x".to_string()).content_type(),
            Some("text/plain")
        );
    }

    #[test]
    fn test_body_bytes() {
        assert!(RequestBody::None.to_bytes().unwrap().is_empty());
        assert_eq!(
            RequestBody::Text("https://many_1.ru".to_string())
                .to_bytes()
                .unwrap(),
            b"https://many_1.ru".to_vec()
        );
        assert_eq!(
            RequestBody::Json(json!(["a"])).to_bytes().unwrap(),
            br#"["a"]"#.to_vec()
        );
    }

    #[test]
    fn test_spec_serialization_omits_empty_body() {
        let spec = RequestSpec::new(HttpMethod::Get, "/api/user/urls", RequestBody::None);
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value, json!({"method": "GET", "path": "/api/user/urls"}));
    }

    #[test]
    fn test_spec_serialization_tags_body() {
        let spec = RequestSpec::new(
            HttpMethod::Post,
            "/",
            RequestBody::Text("https://many_7.ru".to_string()),
        );
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "method": "POST",
                "path": "/",
                "body": {"encoding": "text", "payload": "https://many_7.ru"}
            })
        );
    }
}
