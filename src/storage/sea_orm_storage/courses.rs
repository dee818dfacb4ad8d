//! 课程存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::users::Entity as Users;
use crate::errors::{CourseHubError, Result};
use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseUpdate, NewCourse},
    },
    users::entities::User,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: NewCourse) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            title: Set(req.title),
            description: Set(req.description),
            estimated_time: Set(req.estimated_time),
            materials_needed: Set(req.materials_needed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过 ID 获取课程及其创建者（显式第二次查询，不走惰性加载）
    pub async fn get_course_with_creator_impl(&self, id: i64) -> Result<Option<(Course, User)>> {
        let course = match self.get_course_by_id_impl(id).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        let creator = Users::find_by_id(course.user_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程创建者失败: {e}")))?
            .ok_or_else(|| {
                CourseHubError::database_operation(format!(
                    "课程 {} 的创建者 {} 不存在",
                    course.id, course.user_id
                ))
            })?;

        Ok(Some((course, creator.into_user())))
    }

    /// 列出全部课程及其创建者（批量查询创建者后在内存中配对）
    pub async fn list_courses_with_creators_impl(&self) -> Result<Vec<(Course, User)>> {
        let courses: Vec<Course> = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_course())
            .collect();

        if courses.is_empty() {
            return Ok(Vec::new());
        }

        // 收集所有 user_id 并去重
        let creator_ids: Vec<i64> = courses
            .iter()
            .map(|c| c.user_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let creators: HashMap<i64, User> = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(creator_ids))
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程创建者失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_user()))
            .collect();

        Ok(courses
            .into_iter()
            .filter_map(|course| {
                let creator = creators.get(&course.user_id).cloned()?;
                Some((course, creator))
            })
            .collect())
    }

    /// 更新课程信息（user_id 保持不变）
    pub async fn update_course_impl(&self, id: i64, update: CourseUpdate) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            title: Set(update.title),
            description: Set(update.description),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(estimated_time) = update.estimated_time {
            model.estimated_time = Set(Some(estimated_time));
        }

        if let Some(materials_needed) = update.materials_needed {
            model.materials_needed = Set(Some(materials_needed));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
