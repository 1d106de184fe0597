use pairing_core::ChangeStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TreeResponse {
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeEntry {
    pub fn is_file(&self) -> bool {
        self.kind == "blob"
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestFile {
    pub filename: String,
    pub status: ChangeStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_response_defaults_truncated_to_false() {
        let json = r#"{"sha":"abc","tree":[{"path":"a.go","type":"blob","mode":"100644"}]}"#;

        let response: TreeResponse = serde_json::from_str(json).expect("should deserialize");

        assert!(!response.truncated);
        assert_eq!(response.tree.len(), 1);
        assert!(response.tree[0].is_file());
    }

    #[test]
    fn tree_entry_directories_are_not_files() {
        let entry = TreeEntry {
            path: "feature".to_string(),
            kind: "tree".to_string(),
        };

        assert!(!entry.is_file());
    }

    #[test]
    fn pull_request_file_ignores_extra_fields() {
        let json = r#"{"sha":"abc","filename":"a/ate_tests/x.go","status":"modified","additions":3}"#;

        let file: PullRequestFile = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(file.filename, "a/ate_tests/x.go");
        assert_eq!(file.status, ChangeStatus::Modified);
    }

    #[test]
    fn pull_request_file_maps_unknown_status_to_other() {
        let json = r#"{"filename":"a/ate_tests/x.go","status":"changed"}"#;

        let file: PullRequestFile = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(file.status, ChangeStatus::Other);
    }
}
