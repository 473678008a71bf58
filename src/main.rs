use anyhow::Context;
use bucket_init::config::ProvisionConfig;
use bucket_init::provision::provision_all;
use bucket_init::s3::{S3ObjectStore, create_client};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ProvisionConfig::from_env();
    config.validate().context("配置校验失败")?;

    info!("存储端点: {}", config.endpoint);
    info!("待初始化的存储桶: {:?}", config.buckets);

    // 客户端只在本次运行的作用域内创建和使用
    let client = create_client(&config).await;
    let store = S3ObjectStore::new(client);

    provision_all(&store, &config).await?;

    info!("全部 {} 个存储桶初始化完成", config.buckets.len());
    Ok(())
}
