//! 存储桶策略文档模块。
//!
//! 该模块负责构建附加到存储桶上的公开读取策略文档，
//! 并将其序列化为 `PutBucketPolicy` 请求所需要的 JSON。

use serde::{Deserialize, Serialize};

/// AWS 策略语言的固定版本号。
pub const POLICY_VERSION: &str = "2012-10-17";

/// 策略语句的效果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// 单条策略语句。
///
/// 字段名按照 AWS 策略文档的固定格式序列化（首字母大写）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    /// 语句 ID。
    #[serde(rename = "Sid")]
    pub sid: String,
    /// 效果（Allow / Deny）。
    #[serde(rename = "Effect")]
    pub effect: Effect,
    /// 主体，`*` 表示公开。
    #[serde(rename = "Principal")]
    pub principal: String,
    /// 允许的操作，例如 `s3:GetObject`。
    #[serde(rename = "Action")]
    pub action: String,
    /// 资源模式，限定在 `<bucket>/*` 范围内。
    #[serde(rename = "Resource")]
    pub resource: String,
}

/// 完整的策略文档：版本号加语句列表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// 版本字符串。
    #[serde(rename = "Version")]
    pub version: String,
    /// 语句列表。
    #[serde(rename = "Statement")]
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// 构建授予公开读取权限的策略文档。
    ///
    /// 生成的文档只包含一条语句：允许任意主体（`*`）
    /// 对 `arn:aws:s3:::<bucket>/*` 下的所有对象执行 `s3:GetObject`。
    ///
    /// # 参数
    ///
    /// * `bucket` - 存储桶名称。
    pub fn public_read(bucket: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                sid: "PublicReadGetObject".to_string(),
                effect: Effect::Allow,
                principal: "*".to_string(),
                action: "s3:GetObject".to_string(),
                resource: format!("arn:aws:s3:::{}/*", bucket),
            }],
        }
    }

    /// 将策略文档序列化为 JSON 字符串。
    ///
    /// # Errors
    ///
    /// 当序列化失败时返回错误。
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_read_shape() {
        let doc = PolicyDocument::public_read("cards");

        assert_eq!(doc.version, POLICY_VERSION);
        assert_eq!(doc.statement.len(), 1);

        let statement = &doc.statement[0];
        assert_eq!(statement.sid, "PublicReadGetObject");
        assert_eq!(statement.effect, Effect::Allow);
        assert_eq!(statement.principal, "*");
        assert_eq!(statement.action, "s3:GetObject");
        assert_eq!(statement.resource, "arn:aws:s3:::cards/*");
    }

    #[test]
    fn test_resource_scoped_to_bucket() {
        // 每个存储桶的策略只限定在它自己的名称下
        let doc = PolicyDocument::public_read("backups");
        assert_eq!(doc.statement[0].resource, "arn:aws:s3:::backups/*");
    }

    #[test]
    fn test_json_rendering() {
        let doc = PolicyDocument::public_read("cards");
        let rendered: serde_json::Value =
            serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        let expected = json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Sid": "PublicReadGetObject",
                "Effect": "Allow",
                "Principal": "*",
                "Action": "s3:GetObject",
                "Resource": "arn:aws:s3:::cards/*"
            }]
        });
        assert_eq!(rendered, expected);
    }
}
