use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseUpdate, NewCourse},
    },
    users::{entities::User, requests::NewUser},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[cfg(test)]
pub mod memory;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已哈希）
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过ID获取课程及其创建者
    async fn get_course_with_creator(&self, id: i64) -> Result<Option<(Course, User)>>;
    // 列出全部课程及其创建者
    async fn list_courses_with_creators(&self) -> Result<Vec<(Course, User)>>;
    // 更新课程信息（user_id 不变）
    async fn update_course(&self, id: i64, update: CourseUpdate) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
