use serde::{Deserialize, Serialize};

/// Project as returned to clients.
///
/// Owned images are flattened to their URLs in insertion order and the video to its URL.
/// `video` is omitted entirely when the project has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub tech_stack: String,
    pub description: String,
    pub languages: String,
    #[serde(rename = "type")]
    pub project_type: i32,
    pub github: String,
    pub production: Option<String>,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub token: Option<String>,
    pub name: String,
    pub tech_stack: String,
    pub description: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "type")]
    pub project_type: i32,
    pub github: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub video: Option<String>,
    pub production: Option<String>,
}

/// Partial project update. Absent (or `null`) fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub token: Option<String>,
    pub name: Option<String>,
    pub tech_stack: Option<String>,
    pub description: Option<String>,
    pub languages: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub project_type: Option<i32>,
    pub github: Option<String>,
    pub production: Option<String>,
    pub images: Option<Vec<String>>,
    pub video: Option<String>,
}
