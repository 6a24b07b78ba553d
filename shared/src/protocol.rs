use crate::{
    AUTH_LOGIN_PATH, AUTH_REGISTER_PATH, Profile, Report, ReportSortField, SortOrder, UserId,
    UserRecord,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the API base address and may embed identifiers.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, e.g. `/profiles/7`.
    fn path(&self) -> String;

    /// Query parameters appended to the URL.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// JSON body, if the endpoint takes one.
    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(None)
    }
}

/// Arbitrary search parameters (`name`, `birth_year`, `sex`, `race` on the server side).
pub type SearchQuery = BTreeMap<String, String>;

/// Generic acknowledgement body: `{ "message": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub has_profile: bool,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        AUTH_LOGIN_PATH.to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl ApiRequest for RegisterRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        AUTH_REGISTER_PATH.to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

// =========================================================
// Profiles
// =========================================================

/// List profiles, newest first. Without a limit the server applies its own default.
#[derive(Debug, Clone, Default)]
pub struct ListProfilesRequest {
    pub limit: Option<u32>,
}

impl ApiRequest for ListProfilesRequest {
    type Response = Vec<Profile>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/profiles/".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        self.limit
            .map(|n| vec![("limit".to_string(), n.to_string())])
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct GetProfileRequest {
    pub profile_id: i64,
}

impl ApiRequest for GetProfileRequest {
    type Response = Profile;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/profiles/{}", self.profile_id)
    }
}

/// Response of profile create/update: `{ message, profile }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMutationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Create a profile; the fields are server-defined and forwarded as-is.
#[derive(Debug, Clone)]
pub struct CreateProfileRequest {
    pub data: serde_json::Value,
}

impl ApiRequest for CreateProfileRequest {
    type Response = ProfileMutationResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/profiles/".to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(self.data.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProfileRequest {
    pub profile_id: i64,
    pub data: serde_json::Value,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = ProfileMutationResponse;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/profiles/{}", self.profile_id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(self.data.clone()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchProfilesRequest {
    pub params: SearchQuery,
}

impl ApiRequest for SearchProfilesRequest {
    type Response = Vec<Profile>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/search/".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Favourite `user_id`. With `fav_user_id` the body is `{ "fav_user_id": n }`, otherwise `{}`.
#[derive(Debug, Clone, Serialize)]
pub struct FavouriteRequest {
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fav_user_id: Option<UserId>,
}

impl ApiRequest for FavouriteRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/profiles/{}/favourite", self.user_id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct ProfileMatchesRequest {
    pub profile_id: i64,
}

impl ApiRequest for ProfileMatchesRequest {
    type Response = Vec<Profile>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/profiles/matches/{}", self.profile_id)
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone)]
pub struct GetUserRequest {
    pub user_id: UserId,
}

impl ApiRequest for GetUserRequest {
    type Response = UserRecord;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users/{}", self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct UserFavouritesRequest {
    pub user_id: UserId,
}

impl ApiRequest for UserFavouritesRequest {
    type Response = Vec<UserRecord>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users/{}/favourites", self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct TopFavouritesRequest {
    pub n: u32,
}

impl ApiRequest for TopFavouritesRequest {
    type Response = Vec<UserRecord>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users/favourites/{}", self.n)
    }
}

// =========================================================
// Reports
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub reported_user_id: UserId,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCreatedResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub report: Option<Report>,
}

impl ApiRequest for CreateReportRequest {
    type Response = ReportCreatedResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/reports/".to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

/// Sorting for the report list; omitted fields fall back to the server defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub sort_by: Option<ReportSortField>,
    pub order: Option<SortOrder>,
}

impl ApiRequest for ReportQuery {
    type Response = Vec<Report>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/reports/".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by".to_string(), sort_by.as_str().to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order".to_string(), order.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn favourite_body_omits_missing_target() {
        let bare = FavouriteRequest {
            user_id: 9,
            fav_user_id: None,
        };
        assert_eq!(bare.path(), "/profiles/9/favourite");
        assert_eq!(bare.body().unwrap(), Some(json!({})));

        let targeted = FavouriteRequest {
            user_id: 1,
            fav_user_id: Some(9),
        };
        assert_eq!(targeted.body().unwrap(), Some(json!({ "fav_user_id": 9 })));
    }

    #[test]
    fn list_profiles_only_sends_limit_when_given() {
        assert!(ListProfilesRequest::default().query().is_empty());
        let limited = ListProfilesRequest { limit: Some(4) };
        assert_eq!(limited.query(), vec![("limit".to_string(), "4".to_string())]);
    }

    #[test]
    fn report_query_skips_unset_fields() {
        assert!(ReportQuery::default().query().is_empty());
        let query = ReportQuery {
            sort_by: Some(ReportSortField::ReportedUserName),
            order: Some(SortOrder::Asc),
        };
        assert_eq!(
            query.query(),
            vec![
                ("sort_by".to_string(), "reported_user_name".to_string()),
                ("order".to_string(), "asc".to_string()),
            ]
        );
    }

    #[test]
    fn login_response_defaults_has_profile() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "access_token": "tok1",
            "user_id": 7,
            "username": "alice",
            "name": "Alice A"
        }))
        .unwrap();
        assert!(!resp.has_profile);
        assert_eq!(resp.user_id, 7);
    }
}
