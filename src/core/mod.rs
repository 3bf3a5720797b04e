//! 核心模块：错误、响应、中间件与提取器

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
