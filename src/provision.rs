//! 存储桶初始化流程模块。
//!
//! 该模块按顺序对每个配置的存储桶执行三个步骤：
//! 创建存储桶、附加公开读取策略、设置 public-read ACL。
//! 每个步骤的失败都会带上失败的步骤和存储桶名称，
//! 并立即终止剩余的流程（不回滚已完成的步骤）。

use crate::config::ProvisionConfig;
use crate::policy::PolicyDocument;
use crate::s3::ObjectStore;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// 初始化过程中的一个离散步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    /// 创建存储桶（包含存在性检查）。
    CreateBucket,
    /// 附加存储桶策略。
    PutBucketPolicy,
    /// 设置存储桶 ACL。
    PutBucketAcl,
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateBucket => "CreateBucket",
            Self::PutBucketPolicy => "PutBucketPolicy",
            Self::PutBucketAcl => "PutBucketAcl",
        };
        f.write_str(name)
    }
}

/// 带有步骤和存储桶上下文的初始化错误。
#[derive(Debug, Error)]
#[error("存储桶 {bucket} 在 {step} 步骤失败: {source}")]
pub struct ProvisionError {
    /// 失败的存储桶名称。
    pub bucket: String,
    /// 失败的步骤。
    pub step: ProvisionStep,
    /// 底层错误。
    #[source]
    pub source: anyhow::Error,
}

impl ProvisionError {
    fn new(bucket: &str, step: ProvisionStep, source: anyhow::Error) -> Self {
        Self {
            bucket: bucket.to_string(),
            step,
            source,
        }
    }
}

/// 初始化单个存储桶。
///
/// 步骤按固定顺序执行：
/// 1. 确保存储桶存在（已存在时跳过创建，重复运行是安全的）
/// 2. 附加公开读取策略，替换已有策略
/// 3. 设置 public-read ACL，覆盖已有 ACL
///
/// # 参数
///
/// * `store` - 存储服务操作接口。
/// * `bucket` - 存储桶名称。
///
/// # Errors
///
/// 任一步骤失败时返回带有步骤和存储桶上下文的错误。
pub async fn provision_bucket(
    store: &dyn ObjectStore,
    bucket: &str,
) -> Result<(), ProvisionError> {
    let exists = store
        .bucket_exists(bucket)
        .await
        .map_err(|e| ProvisionError::new(bucket, ProvisionStep::CreateBucket, e))?;

    if exists {
        warn!(bucket, "存储桶已存在，跳过创建");
    } else {
        store
            .create_bucket(bucket)
            .await
            .map_err(|e| ProvisionError::new(bucket, ProvisionStep::CreateBucket, e))?;
        info!(bucket, step = %ProvisionStep::CreateBucket, "存储桶已创建");
    }

    let policy = PolicyDocument::public_read(bucket)
        .to_json()
        .map_err(|e| ProvisionError::new(bucket, ProvisionStep::PutBucketPolicy, e.into()))?;
    store
        .put_bucket_policy(bucket, &policy)
        .await
        .map_err(|e| ProvisionError::new(bucket, ProvisionStep::PutBucketPolicy, e))?;
    info!(bucket, step = %ProvisionStep::PutBucketPolicy, "公开读取策略已附加");

    store
        .put_bucket_acl(bucket)
        .await
        .map_err(|e| ProvisionError::new(bucket, ProvisionStep::PutBucketAcl, e))?;
    info!(bucket, step = %ProvisionStep::PutBucketAcl, "ACL 已设置为 public-read");

    Ok(())
}

/// 按配置中的顺序初始化所有存储桶。
///
/// 严格顺序执行，第一个失败的存储桶会终止整个流程，
/// 之前已完成的存储桶保持已初始化的状态。
/// 配置中没有存储桶时不发起任何请求，直接成功返回。
///
/// # 参数
///
/// * `store` - 存储服务操作接口。
/// * `config` - 初始化配置。
///
/// # Errors
///
/// 第一个失败的存储桶的错误。
pub async fn provision_all(
    store: &dyn ObjectStore,
    config: &ProvisionConfig,
) -> Result<(), ProvisionError> {
    for bucket in &config.buckets {
        provision_bucket(store, bucket).await?;
    }
    Ok(())
}
