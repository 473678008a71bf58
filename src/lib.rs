//! 存储桶初始化工具库
//!
//! 这是一个面向本地开发环境的存储桶初始化工具，主要功能包括：
//! - 在本地 S3 兼容模拟器上创建一组固定的存储桶
//! - 为每个存储桶附加公开读取策略文档
//! - 将每个存储桶的 ACL 设置为 public-read
//!
//! 整个流程是顺序的一次性过程，重复运行是安全的：
//! 已存在的存储桶不会重新创建，策略和 ACL 会被重新应用。

pub mod config;
pub mod policy;
pub mod provision;
pub mod s3;

pub use config::ProvisionConfig;
pub use policy::PolicyDocument;
pub use provision::{ProvisionError, ProvisionStep, provision_all, provision_bucket};
pub use s3::{ObjectStore, S3ObjectStore, create_client};
