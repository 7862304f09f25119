use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UploadSource {
    /// Raw CSV text, header row included.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepoSource {
    /// Path relative to the configured data root.
    pub path: String,
}

/// Where a dataset slot reads from. Repo loads go through the TTL cache;
/// uploaded content is parsed fresh on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub enum DatasetSource {
    #[serde(rename = "upload")]
    Upload(UploadSource),
    #[serde(rename = "repo")]
    Repo(RepoSource),
}

impl DatasetSource {
    pub fn repo(path: impl Into<String>) -> Self {
        DatasetSource::Repo(RepoSource { path: path.into() })
    }

    pub fn upload(content: impl Into<String>) -> Self {
        DatasetSource::Upload(UploadSource {
            content: content.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_json_shape() {
        let source: DatasetSource =
            serde_json::from_str(r#"{"repo": {"path": "data/sample_a.csv"}}"#).unwrap();
        assert_eq!(source, DatasetSource::repo("data/sample_a.csv"));

        let source: DatasetSource =
            serde_json::from_str(r#"{"upload": {"content": "x\n1\n"}}"#).unwrap();
        assert_eq!(source, DatasetSource::upload("x\n1\n"));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result: Result<DatasetSource, _> =
            serde_json::from_str(r#"{"s3": {"bucket": "nope"}}"#);
        assert!(result.is_err());
    }
}
