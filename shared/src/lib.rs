use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 未配置时使用的 API 基础地址
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// 持久化存储中的 token 键
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";
/// 持久化存储中的用户记录键（JSON 序列化）
pub const STORAGE_KEY_USER: &str = "user";

pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_REGISTER_PATH: &str = "/auth/register";

/// 以这些后缀结尾的请求永远不携带认证头
pub const UNAUTHENTICATED_SUFFIXES: [&str; 3] = [AUTH_LOGIN_PATH, AUTH_REGISTER_PATH, "/register"];

pub const DEFAULT_LAST_PROFILES: u32 = 4;
pub const DEFAULT_TOP_FAVOURITES: u32 = 20;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

pub type UserId = i64;

/// 当前登录用户，登录成功后构造并持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

/// 服务端定义的资料记录，原样透传
///
/// 客户端只读取其中的 `id` / `user_id` 用于路由和收藏。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(pub serde_json::Value);

impl Profile {
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(serde_json::Value::as_i64)
    }

    /// 资料所属用户，收藏操作以它为目标
    pub fn user_id(&self) -> Option<UserId> {
        self.0.get("user_id").and_then(serde_json::Value::as_i64)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// 用户记录（收藏列表、热门收藏、用户详情），原样透传
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub serde_json::Value);

impl UserRecord {
    pub fn id(&self) -> Option<UserId> {
        self.0.get("id").and_then(serde_json::Value::as_i64)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// 举报记录，同样原样透传
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(pub serde_json::Value);

impl Report {
    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// 举报列表可用的排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSortField {
    CreatedAt,
    ReporterName,
    ReportedUserName,
    Reason,
}

impl ReportSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSortField::CreatedAt => "created_at",
            ReportSortField::ReporterName => "reporter_name",
            ReportSortField::ReportedUserName => "reported_user_name",
            ReportSortField::Reason => "reason",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_exposes_identifiers_only() {
        let profile = Profile(json!({ "id": 3, "user_id": 7, "parish": "Kingston" }));
        assert_eq!(profile.id(), Some(3));
        assert_eq!(profile.user_id(), Some(7));

        let missing = Profile(json!({ "description": "no ids" }));
        assert_eq!(missing.id(), None);
        assert_eq!(missing.user_id(), None);
    }

    #[test]
    fn profile_round_trips_unmodified() {
        let raw = json!({ "id": 1, "extra": { "nested": [1, 2] } });
        let profile: Profile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn session_user_uses_storage_field_names() {
        let user = SessionUser {
            id: 7,
            username: "alice".into(),
            name: "Alice A".into(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "id": 7, "username": "alice", "name": "Alice A" })
        );
    }
}
