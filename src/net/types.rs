//! Data-transfer contracts for the judge platform API.
//!
//! Pure data, no behavior: shapes mirror the backend's JSON responses
//! field-for-field. Embedded author/user objects on list items are kept as
//! raw [`serde_json::Value`] since the backend varies what it inlines there
//! and nothing in the client reads past the display fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Platform role attached to every account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

/// A full user identity record, as returned by login and persisted for the
/// session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub avatar: String,
    pub school: String,
    pub student_id: String,
    pub role: Role,
    pub solved: u32,
    pub submitted: u32,
    pub rating: i32,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    pub expires_in: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Envelope around `GET /users/profile`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: User,
}

/// Problem difficulty as the backend spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Problem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub input_desc: String,
    pub output_desc: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub time_limit: u32,
    pub memory_limit: u32,
    pub submit_count: u32,
    pub accepted_count: u32,
    pub is_public: bool,
    pub author: serde_json::Value,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProblemList {
    pub problems: Vec<Problem>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub user_id: u64,
    pub problem_id: u64,
    pub code: String,
    pub language: String,
    pub status: String,
    pub score: i32,
    pub run_time: i32,
    pub memory: i32,
    pub error_message: String,
    pub passed_tests: i32,
    pub total_tests: i32,
    pub judge_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionList {
    pub submissions: Vec<Submission>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionCreateRequest {
    pub problem_id: u64,
    pub code: String,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionCreateResponse {
    pub message: String,
    pub submission: Submission,
}

/// Envelope around `GET /submissions/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionDetailsResponse {
    pub submission: Submission,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionStats {
    pub total_submissions: i64,
    pub accepted_submissions: i64,
    pub solved_problems: i64,
    pub acceptance_rate: f64,
}

/// Envelope around `GET /submissions/stats`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionStatsResponse {
    pub stats: SubmissionStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub user: serde_json::Value,
    pub reply_count: u32,
    pub view_count: u32,
    pub is_locked: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForumPostList {
    pub posts: Vec<ForumPost>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: u64,
    pub content: String,
    pub author: serde_json::Value,
    pub parent_id: u64,
    pub post_id: u64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForumReplyList {
    pub replies: Vec<ForumReply>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct News {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub author: serde_json::Value,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsList {
    pub news: Vec<News>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

/// Envelope around `GET /news/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsDetailResponse {
    pub news: News,
}
