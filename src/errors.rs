//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 实现 `ResponseError`，未被处理程序就地消化的错误统一走全局错误响应。

use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::ErrorDetails;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_coursehub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CourseHubError {
            $($variant(String),)*
        }

        impl CourseHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CourseHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CourseHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_coursehub_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
}

impl CourseHubError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 映射到 HTTP 状态码，未归类的错误一律 500
    pub fn status(&self) -> StatusCode {
        match self {
            CourseHubError::Validation(_) => StatusCode::BAD_REQUEST,
            CourseHubError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CourseHubError::Authorization(_) => StatusCode::FORBIDDEN,
            CourseHubError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for CourseHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseHubError {}

// 全局错误响应：只暴露 message，不暴露内部细节
impl actix_web::ResponseError for CourseHubError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        if self.status().is_server_error() {
            tracing::error!("Global error handler: {}", self.format_simple());
        }
        HttpResponse::build(self.status()).json(ErrorDetails::new(self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CourseHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        CourseHubError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CourseHubError {
    fn from(err: std::io::Error) -> Self {
        CourseHubError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for CourseHubError {
    fn from(err: serde_json::Error) -> Self {
        CourseHubError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CourseHubError {
    fn from(err: chrono::ParseError) -> Self {
        CourseHubError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CourseHubError::database_config("test").code(), "E001");
        assert_eq!(CourseHubError::validation("test").code(), "E004");
        assert_eq!(CourseHubError::authentication("test").code(), "E008");
        assert_eq!(CourseHubError::authorization("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CourseHubError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            CourseHubError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CourseHubError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CourseHubError::validation("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CourseHubError::authentication("x").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CourseHubError::authorization("x").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            CourseHubError::not_found("x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CourseHubError::database_operation("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_format_simple() {
        let err = CourseHubError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
