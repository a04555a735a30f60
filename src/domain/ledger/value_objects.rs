//! Ledger Context - Value Objects

use serde::{Deserialize, Deserializer, Serialize};

/// 调用模式
///
/// - Submit: 提交交易（背书 + 排序，修改账本状态）
/// - Evaluate: 只读查询（不产生交易）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallMode {
    Submit,
    Evaluate,
}

impl CallMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Evaluate => "evaluate",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Evaluate)
    }
}

impl std::fmt::Display for CallMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 链码函数名
///
/// 与链码导出的函数名一一对应，`as_str` 即线上名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChaincodeFunction {
    Init,
    Invoke,
    Query,
    Delete,
    GetAllQuery,
    AddCar,
    AddCarRecord,
    GetCar,
    ReceivePoints,
    PayPoints,
    CreateUser,
    GetUser,
}

impl ChaincodeFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::Invoke => "Invoke",
            Self::Query => "Query",
            Self::Delete => "Delete",
            Self::GetAllQuery => "GetAllQuery",
            Self::AddCar => "AddCar",
            Self::AddCarRecord => "AddCarRecord",
            Self::GetCar => "GetCar",
            Self::ReceivePoints => "ReceivePoints",
            Self::PayPoints => "PayPoints",
            Self::CreateUser => "CreateUser",
            Self::GetUser => "GetUser",
        }
    }
}

impl std::fmt::Display for ChaincodeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChaincodeFunction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 链码位置参数
///
/// 链码参数在线上一律是字符串。请求里的数字、布尔值会被转成字符串，
/// `null` 与缺失的参数都视为空字符串，由链码自行判断是否合法。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LedgerArg(String);

impl LedgerArg {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for LedgerArg {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LedgerArg {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for LedgerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LedgerArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
            Bool(bool),
            Null,
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
            Raw::Bool(b) => Self(b.to_string()),
            Raw::Null => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        vin: LedgerArg,
        #[serde(default)]
        points: LedgerArg,
    }

    #[test]
    fn test_arg_from_json_string_and_number() {
        let body: Body = serde_json::from_str(r#"{"vin":"KMH123","points":150}"#).unwrap();
        assert_eq!(body.vin.as_str(), "KMH123");
        assert_eq!(body.points.as_str(), "150");
    }

    #[test]
    fn test_arg_from_bool_and_null() {
        let body: Body = serde_json::from_str(r#"{"vin":true,"points":null}"#).unwrap();
        assert_eq!(body.vin.as_str(), "true");
        assert!(body.points.is_empty());
    }

    #[test]
    fn test_missing_arg_is_empty() {
        let body: Body = serde_json::from_str(r#"{"vin":"KMH123"}"#).unwrap();
        assert!(body.points.is_empty());
    }

    #[test]
    fn test_arg_rejects_objects() {
        let result: Result<Body, _> = serde_json::from_str(r#"{"vin":{"nested":1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_function_wire_names() {
        assert_eq!(ChaincodeFunction::GetAllQuery.as_str(), "GetAllQuery");
        assert_eq!(ChaincodeFunction::AddCarRecord.to_string(), "AddCarRecord");
        assert_eq!(
            serde_json::to_string(&ChaincodeFunction::PayPoints).unwrap(),
            r#""PayPoints""#
        );
    }

    #[test]
    fn test_call_mode() {
        assert!(CallMode::Evaluate.is_read_only());
        assert!(!CallMode::Submit.is_read_only());
        assert_eq!(CallMode::Submit.to_string(), "submit");
    }
}
