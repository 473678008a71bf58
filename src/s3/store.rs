//! 存储服务操作的抽象层。
//!
//! 该模块定义了初始化过程用到的四个存储桶操作的 trait，
//! 以及基于 `aws_sdk_s3::Client` 的实现。
//! 通过这个接口，测试可以为每个用例替换一个 mock 客户端。

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::types::BucketCannedAcl;
use mockall::automock;

/// 初始化过程需要的存储服务操作。
#[automock]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 检查存储桶是否存在。
    ///
    /// # 返回值
    ///
    /// 存在返回 `true`，不存在返回 `false`。
    ///
    /// # Errors
    ///
    /// 当请求因为连接或权限等原因失败时返回错误。
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// 创建存储桶。
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// 将策略文档（JSON 字符串）附加到存储桶上，替换已有的策略。
    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()>;

    /// 将存储桶的 ACL 设置为 public-read，覆盖已有的 ACL。
    async fn put_bucket_acl(&self, bucket: &str) -> Result<()>;
}

/// 基于 AWS SDK 的 `ObjectStore` 实现。
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// 用已配置好的 S3 客户端创建实例。
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            // 404 表示存储桶不存在，其他错误（连接失败、权限不足）向上传播
            Err(err) => match err.as_service_error() {
                Some(service_err) if service_err.is_not_found() => Ok(false),
                _ => Err(err.into()),
            },
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        match self.client.create_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(()),
            // 存储桶已经属于我们时视为成功，保证重复运行不会失败
            Err(err) => match err.as_service_error() {
                Some(service_err)
                    if service_err.is_bucket_already_owned_by_you()
                        || service_err.is_bucket_already_exists() =>
                {
                    Ok(())
                }
                _ => Err(err.into()),
            },
        }
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()> {
        self.client
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await?;
        Ok(())
    }

    async fn put_bucket_acl(&self, bucket: &str) -> Result<()> {
        self.client
            .put_bucket_acl()
            .bucket(bucket)
            .acl(BucketCannedAcl::PublicRead)
            .send()
            .await?;
        Ok(())
    }
}
