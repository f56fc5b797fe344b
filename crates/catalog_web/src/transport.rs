//! The HTTP seam under the client.

use crate::error::{WebError, WebResult};
use futures_util::{future::LocalBoxFuture, FutureExt};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(WebError::new(format!("Unsupported method {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends one request, once. Only failures to get any response at all are
/// errors here, statuses are left to the client.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, WebResult<HttpResponse>>;
}

/// `fetch` through reqwasm.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, WebResult<HttpResponse>> {
        async move {
            let url = request.url.as_str();
            let mut builder = match request.method {
                Method::Get => reqwasm::http::Request::get(url),
                Method::Post => reqwasm::http::Request::post(url),
                Method::Put => reqwasm::http::Request::put(url),
                Method::Delete => reqwasm::http::Request::delete(url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let res = builder.send().await.map_err(WebError::transport)?;
            let status = res.status();
            let body = res.binary().await.map_err(WebError::transport)?;
            Ok(HttpResponse { status, body })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_methods_case_insensitively() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("PUT".parse::<Method>().unwrap(), Method::Put);
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
    }

    #[test]
    fn rejects_other_methods() {
        let err = "patch".parse::<Method>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported method patch");
    }
}
