//! S3 客户端创建模块。
//!
//! 该模块根据配置创建 S3 客户端。客户端在一次初始化运行的
//! 作用域内创建和使用，不作为全局状态持有。

use crate::config::ProvisionConfig;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::config::Credentials;

/// 使用给定配置创建 S3 客户端。
///
/// 使用静态凭证和固定端点，并启用 path-style 寻址，
/// 这是本地模拟器（LocalStack、MinIO 等）所要求的访问方式。
///
/// # 参数
///
/// * `config` - 初始化配置。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn create_client(config: &ProvisionConfig) -> Client {
    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        "static-credentials",
    );

    let region_provider =
        RegionProviderChain::first_try(Some(Region::new(config.region.clone())));

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(region_provider)
        .endpoint_url(&config.endpoint)
        .load()
        .await;

    let s3_config = S3ConfigBuilder::from(&aws_config)
        .force_path_style(true)
        .build();

    Client::from_conf(s3_config)
}
