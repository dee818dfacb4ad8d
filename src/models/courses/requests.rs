use serde::Deserialize;

// 课程创建请求（来自HTTP请求体）
//
// # user_id 字段说明
// 所属用户取自请求体而非认证用户，行为沿袭既有 API；
// 指向不存在用户的 user_id 会作为校验错误拒绝。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: Option<i64>,
}

// 课程更新请求（user_id 不可通过更新修改）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

// 课程写入模型（用于存储层）
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
}

// 课程更新模型（用于存储层，未提供的可选字段保持原值）
#[derive(Debug, Clone)]
pub struct CourseUpdate {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}
