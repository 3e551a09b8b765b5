use serde::{Deserialize, Serialize};

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Payload of a successful sign-in/sign-up (the envelope's `data`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signup_request_is_camel_case() {
        let request = SignupRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["lastName"], "Doe");
    }

    #[test]
    fn test_user_info_tolerates_sparse_payload() {
        let user: UserInfo = serde_json::from_value(json!({ "firstName": "Jane" })).unwrap();
        assert_eq!(user.first_name, "Jane");
        assert!(user.id.is_empty());
        assert!(user.role.is_none());
    }
}
