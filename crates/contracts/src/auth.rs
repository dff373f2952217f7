use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of both `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_decodes_mongo_shape() {
        let json = r#"{"_id":"665f1c2a9b1e8a0012d4c001","name":"Admin","email":"admin@example.com","role":"admin"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "665f1c2a9b1e8a0012d4c001");
        assert!(user.is_admin());
    }

    #[test]
    fn missing_role_is_not_admin() {
        let json = r#"{"_id":"665f1c2a9b1e8a0012d4c002","name":"User","email":"user@example.com"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin());
    }
}
