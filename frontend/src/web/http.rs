//! HTTP 传输层
//!
//! 使用 `gloo-net` 的 fetch 封装实现核心库的 `HttpClient`。

use gloo_net::http::{Request, RequestBuilder};
use jamdate::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut request = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            request = request.header(key, value);
        }

        let request = match req.body {
            Some(body) => request.body(body),
            None => request.build(),
        }
        .map_err(|e| TransportError(format!("请求构建失败: {}", e)))?;

        // fetch 只在网络层失败时 reject，非 2xx 仍是正常响应
        let response = request
            .send()
            .await
            .map_err(|e| TransportError(format!("网络错误: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("响应读取失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
