use serde::Deserialize;

/// A SonarQube quality-gate webhook payload. Absent fields decode to their
/// zero value; required-field validation happens at render time so a
/// partial payload still reports a precise error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    #[serde(default)]
    pub analysed_at: String,

    #[serde(default)]
    pub branch: Branch,

    #[serde(default)]
    pub changed_at: String,

    #[serde(default)]
    pub project: Project,

    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub quality_gate: QualityGate,

    #[serde(default)]
    pub revision: String,

    #[serde(default)]
    pub server_url: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub task_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default)]
    pub is_main: bool,

    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: BranchKind,

    #[serde(default)]
    pub url: String,
}

/// Branch descriptor kind. For pull requests the branch name field carries
/// the pull-request id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum BranchKind {
    #[serde(rename = "BRANCH")]
    Branch,

    #[serde(rename = "PULL_REQUEST")]
    PullRequest,

    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default, rename = "sonar.analysis.detectedci")]
    pub detected_ci: String,

    #[serde(default, rename = "sonar.analysis.detectedscm")]
    pub detected_scm: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualityGate {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default)]
    pub error_threshold: String,

    #[serde(default)]
    pub metric: String,

    #[serde(default)]
    pub operator: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub value: Option<String>,
}
