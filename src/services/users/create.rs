use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use tracing::error;

use super::UserService;
use crate::models::ValidationErrors;
use crate::models::users::requests::{CreateUserRequest, NewUser};
use crate::utils::password::hash_password;
use crate::utils::validate::{EMAIL_TAKEN_MSG, validate_new_user};

pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    let valid = match validate_new_user(user_data) {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(ValidationErrors::new(errors)));
        }
    };

    // 邮箱唯一性校验
    if storage
        .get_user_by_email(&valid.email_address)
        .await?
        .is_some()
    {
        return Ok(HttpResponse::BadRequest()
            .json(ValidationErrors::new(vec![EMAIL_TAKEN_MSG.to_string()])));
    }

    let password_hash = hash_password(&valid.password)?;

    let new_user = NewUser {
        first_name: valid.first_name,
        last_name: valid.last_name,
        email_address: valid.email_address,
        password_hash,
    };

    match storage.create_user(new_user).await {
        Ok(_) => Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, "/"))
            .finish()),
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::BadRequest()
                    .json(ValidationErrors::new(vec![EMAIL_TAKEN_MSG.to_string()])))
            } else {
                Err(e.into())
            }
        }
    }
}
