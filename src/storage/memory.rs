//! 测试用内存存储
//!
//! 行为与 SeaORM 实现保持一致：自增 ID、邮箱唯一约束（错误文案
//! 与 SQLite 的唯一约束冲突一致，用于触发服务层的兜底分支）。

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{CourseHubError, Result};
use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseUpdate, NewCourse},
    },
    users::{entities::User, requests::NewUser},
};
use crate::storage::Storage;

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    courses: HashMap<i64, Course>,
    next_user_id: i64,
    next_course_id: i64,
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut inner = self.inner.lock().expect("memory storage poisoned");

        if inner
            .users
            .values()
            .any(|u| u.email_address == user.email_address)
        {
            return Err(CourseHubError::database_operation(
                "UNIQUE constraint failed: users.email_address",
            ));
        }

        inner.next_user_id += 1;
        let now = chrono::Utc::now();
        let created = User {
            id: inner.next_user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let inner = self.inner.lock().expect("memory storage poisoned");
        Ok(inner.users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().expect("memory storage poisoned");
        Ok(inner
            .users
            .values()
            .find(|u| u.email_address == email)
            .cloned())
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course> {
        let mut inner = self.inner.lock().expect("memory storage poisoned");

        if !inner.users.contains_key(&course.user_id) {
            return Err(CourseHubError::database_operation(
                "FOREIGN KEY constraint failed",
            ));
        }

        inner.next_course_id += 1;
        let now = chrono::Utc::now();
        let created = Course {
            id: inner.next_course_id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            created_at: now,
            updated_at: now,
        };
        inner.courses.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        let inner = self.inner.lock().expect("memory storage poisoned");
        Ok(inner.courses.get(&id).cloned())
    }

    async fn get_course_with_creator(&self, id: i64) -> Result<Option<(Course, User)>> {
        let inner = self.inner.lock().expect("memory storage poisoned");
        let course = match inner.courses.get(&id) {
            Some(course) => course.clone(),
            None => return Ok(None),
        };
        let creator = inner
            .users
            .get(&course.user_id)
            .cloned()
            .ok_or_else(|| CourseHubError::database_operation("课程创建者不存在"))?;
        Ok(Some((course, creator)))
    }

    async fn list_courses_with_creators(&self) -> Result<Vec<(Course, User)>> {
        let inner = self.inner.lock().expect("memory storage poisoned");
        let mut courses: Vec<&Course> = inner.courses.values().collect();
        courses.sort_by_key(|c| c.id);
        Ok(courses
            .into_iter()
            .filter_map(|course| {
                let creator = inner.users.get(&course.user_id)?.clone();
                Some((course.clone(), creator))
            })
            .collect())
    }

    async fn update_course(&self, id: i64, update: CourseUpdate) -> Result<Option<Course>> {
        let mut inner = self.inner.lock().expect("memory storage poisoned");
        match inner.courses.get_mut(&id) {
            Some(course) => {
                course.title = update.title;
                course.description = update.description;
                if let Some(estimated_time) = update.estimated_time {
                    course.estimated_time = Some(estimated_time);
                }
                if let Some(materials_needed) = update.materials_needed {
                    course.materials_needed = Some(materials_needed);
                }
                course.updated_at = chrono::Utc::now();
                Ok(Some(course.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().expect("memory storage poisoned");
        Ok(inner.courses.remove(&id).is_some())
    }
}
