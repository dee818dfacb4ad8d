//! HTTP Basic 凭据解码
//!
//! 纯函数：请求头字符串 -> 凭据或错误，便于独立测试。
//! 用户查找与密码校验在认证中间件中完成。

use base64::{Engine as _, engine::general_purpose};

const BASIC_PREFIX: &str = "Basic ";

/// 从 Authorization 头解出的凭据（identifier:secret）
#[derive(Debug, Clone, PartialEq)]
pub struct BasicCredentials {
    pub email_address: String,
    pub password: String,
}

/// 解码 Basic 凭据
pub fn decode_credentials(header: &str) -> Result<BasicCredentials, &'static str> {
    let encoded = header
        .strip_prefix(BASIC_PREFIX)
        .ok_or("Authorization scheme is not Basic")?;

    let decoded = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| "Invalid base64 in Authorization header")?;

    let decoded =
        String::from_utf8(decoded).map_err(|_| "Authorization credentials are not valid UTF-8")?;

    // 密码允许包含冒号，只在第一个冒号处切分
    let (email_address, password) = decoded
        .split_once(':')
        .ok_or("Credentials are not in identifier:secret form")?;

    if email_address.is_empty() {
        return Err("Missing identifier in credentials");
    }

    Ok(BasicCredentials {
        email_address: email_address.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }

    #[test]
    fn test_decode_valid_credentials() {
        let creds = decode_credentials(&encode("joe@x.com:secret1")).expect("decode failed");
        assert_eq!(creds.email_address, "joe@x.com");
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn test_password_may_contain_colon() {
        let creds = decode_credentials(&encode("joe@x.com:se:cr:et")).expect("decode failed");
        assert_eq!(creds.password, "se:cr:et");
    }

    #[test]
    fn test_rejects_non_basic_scheme() {
        assert!(decode_credentials("Bearer abcdef").is_err());
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(decode_credentials("Basic !!!not-base64!!!").is_err());
    }

    #[test]
    fn test_rejects_missing_colon() {
        assert!(decode_credentials(&encode("joe@x.com")).is_err());
    }

    #[test]
    fn test_rejects_empty_identifier() {
        assert!(decode_credentials(&encode(":secret1")).is_err());
    }
}
