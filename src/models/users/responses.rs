use serde::Serialize;

use super::entities::User;

// 当前认证用户响应（仅公开字段，永不包含密码哈希）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl UserResponse {
    pub fn from_user(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}
