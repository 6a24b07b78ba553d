//! 浏览器平台实现
//!
//! 为核心库的 `HttpClient` / `Storage` / `Scheduler` 提供浏览器实现，
//! 以及基于 History API 的路由服务。

mod http;
pub mod router;
mod storage;
mod timer;

pub use http::FetchHttpClient;
pub use storage::BrowserStorage;
pub use timer::TimeoutScheduler;
