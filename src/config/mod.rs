//! 存储桶初始化工具的配置模块。
//!
//! 该模块负责从环境变量加载和校验配置。

use anyhow::{Result, bail};
use std::env;

/// 默认的存储端点（本地模拟器的地址和端口）。
const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// 默认的测试凭证。
const DEFAULT_ACCESS_KEY_ID: &str = "test";
const DEFAULT_SECRET_ACCESS_KEY: &str = "test";

/// 默认的区域。
const DEFAULT_REGION: &str = "us-east-1";

/// 默认需要初始化的存储桶列表。
const DEFAULT_BUCKETS: &[&str] = &["cards", "backups"];

/// 初始化过程使用的完整配置。
///
/// 所有字段都有面向本地开发环境的默认值，
/// 可以通过环境变量覆盖：
///
/// * `S3_ENDPOINT` - S3 兼容服务的端点 URL
/// * `S3_ACCESS_KEY_ID` - 访问密钥 ID
/// * `S3_SECRET_ACCESS_KEY` - 秘密访问密钥
/// * `S3_REGION` - 区域
/// * `S3_BUCKETS` - 逗号分隔的存储桶名称列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    /// 存储端点 URL。
    pub endpoint: String,
    /// 访问密钥 ID。
    pub access_key_id: String,
    /// 秘密访问密钥。
    pub secret_access_key: String,
    /// 区域。
    pub region: String,
    /// 按顺序初始化的存储桶名称列表。
    pub buckets: Vec<String>,
}

impl ProvisionConfig {
    /// 从环境变量读取配置，未设置的字段使用本地开发默认值。
    pub fn from_env() -> Self {
        let buckets = match env::var("S3_BUCKETS") {
            Ok(value) => parse_bucket_list(&value),
            Err(_) => DEFAULT_BUCKETS.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            endpoint: env::var("S3_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            access_key_id: env::var("S3_ACCESS_KEY_ID")
                .unwrap_or_else(|_| DEFAULT_ACCESS_KEY_ID.to_string()),
            secret_access_key: env::var("S3_SECRET_ACCESS_KEY")
                .unwrap_or_else(|_| DEFAULT_SECRET_ACCESS_KEY.to_string()),
            region: env::var("S3_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            buckets,
        }
    }

    /// 在发起任何网络请求之前校验配置。
    ///
    /// # Errors
    ///
    /// 当端点不是 http/https URL、凭证为空
    /// 或任一存储桶名称不符合 S3 命名规则时返回错误。
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            bail!("S3_ENDPOINT 必须是 http 或 https URL: {}", self.endpoint);
        }
        if self.access_key_id.is_empty() {
            bail!("S3_ACCESS_KEY_ID 不能为空");
        }
        if self.secret_access_key.is_empty() {
            bail!("S3_SECRET_ACCESS_KEY 不能为空");
        }
        if self.region.is_empty() {
            bail!("S3_REGION 不能为空");
        }
        for bucket in &self.buckets {
            if !is_valid_bucket_name(bucket) {
                bail!("存储桶名称不符合 S3 命名规则: {:?}", bucket);
            }
        }
        Ok(())
    }
}

/// 解析逗号分隔的存储桶列表，忽略空白项。
pub fn parse_bucket_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 按照 S3 的命名规则检查存储桶名称是否合法。
///
/// 规则：
/// - 长度在 3 到 63 个字符之间
/// - 只能包含小写字母、数字、连字符和点
/// - 必须以字母或数字开头和结尾
/// - 不能包含连续的点
/// - 不能是 IPv4 地址的形式
pub fn is_valid_bucket_name(name: &str) -> bool {
    if name.len() < 3 || name.len() > 63 {
        return false;
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
    {
        return false;
    }
    let first = name.as_bytes()[0];
    let last = name.as_bytes()[name.len() - 1];
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return false;
    }
    if name.contains("..") {
        return false;
    }
    if is_ipv4_like(name) {
        return false;
    }
    true
}

/// 判断名称是否形如 IPv4 地址（例如 `192.168.1.1`）。
fn is_ipv4_like(name: &str) -> bool {
    let parts: Vec<&str> = name.split('.').collect();
    parts.len() == 4 && parts.iter().all(|p| p.parse::<u8>().is_ok())
}
