//! S3 模块
//!
//! 该模块负责处理与 S3 兼容存储服务的交互，包括客户端的创建
//! 和初始化过程用到的存储桶操作。

// 声明子模块
pub mod client;
pub mod store;

// 重新导出常用的类型和函数
pub use client::create_client;
pub use store::{ObjectStore, S3ObjectStore};
