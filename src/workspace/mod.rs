use crate::utils::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct WorkspaceManager {
    temp_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDirStatus {
    Created,
    Failed(String),
}

#[derive(Debug)]
pub struct LocaleDirReport {
    pub locale: String,
    pub status: LocaleDirStatus,
}

impl WorkspaceManager {
    pub fn new(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: temp_root.into(),
        }
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    pub fn archive_path(&self, id: &str) -> PathBuf {
        self.temp_root.join(format!("{id}.zip"))
    }

    pub async fn create_workspace(&self, id: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.temp_root).await?;
        let workspace = self.temp_root.join(id);
        tokio::fs::create_dir(&workspace).await?;
        Ok(workspace)
    }

    // best-effort: every creation is attempted and reported, none propagate
    pub async fn create_locale_dirs<I, S>(
        &self,
        workspace: &Path,
        locales: I,
    ) -> Vec<LocaleDirReport>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attempts = locales.into_iter().map(|locale| {
            let locale = locale.into();
            let path = workspace.join(&locale);
            async move {
                let status = match tokio::fs::create_dir(&path).await {
                    Ok(()) => LocaleDirStatus::Created,
                    Err(e) => {
                        warn!(locale = %locale, error = %e, "failed to create locale directory");
                        LocaleDirStatus::Failed(e.to_string())
                    }
                };
                LocaleDirReport { locale, status }
            }
        });

        futures::future::join_all(attempts).await
    }

    pub async fn destroy(&self, path: &Path) {
        match tokio::fs::remove_dir_all(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "failed to remove workspace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_workspace_under_temp_root() {
        let root = tempfile::tempdir().unwrap();
        let manager = WorkspaceManager::new(root.path().join("jobs"));

        let workspace = manager.create_workspace("job-1").await.unwrap();

        assert!(workspace.is_dir());
        assert_eq!(manager.temp_root(), root.path().join("jobs"));
        assert_eq!(workspace, root.path().join("jobs").join("job-1"));
    }

    #[tokio::test]
    async fn creates_one_directory_per_locale() {
        let root = tempfile::tempdir().unwrap();
        let manager = WorkspaceManager::new(root.path());
        let workspace = manager.create_workspace("job-1").await.unwrap();

        let reports = manager
            .create_locale_dirs(&workspace, ["en", "fr", "de"])
            .await;

        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert_eq!(report.status, LocaleDirStatus::Created);
            assert!(workspace.join(&report.locale).is_dir());
        }
    }

    #[tokio::test]
    async fn failed_locale_directory_is_reported_not_fatal() {
        let root = tempfile::tempdir().unwrap();
        let manager = WorkspaceManager::new(root.path());
        let workspace = manager.create_workspace("job-1").await.unwrap();

        let reports = manager
            .create_locale_dirs(&workspace, ["missing/nested", "en"])
            .await;

        assert!(matches!(reports[0].status, LocaleDirStatus::Failed(_)));
        assert_eq!(reports[1].status, LocaleDirStatus::Created);
        assert!(workspace.join("en").is_dir());
    }

    #[tokio::test]
    async fn destroy_removes_the_tree() {
        let root = tempfile::tempdir().unwrap();
        let manager = WorkspaceManager::new(root.path());
        let workspace = manager.create_workspace("job-1").await.unwrap();
        manager.create_locale_dirs(&workspace, ["en"]).await;

        manager.destroy(&workspace).await;

        assert!(!workspace.exists());
    }

    #[tokio::test]
    async fn destroy_is_a_noop_for_missing_paths() {
        let root = tempfile::tempdir().unwrap();
        let manager = WorkspaceManager::new(root.path());

        manager.destroy(&root.path().join("never-created")).await;
    }

    #[test]
    fn archive_path_sits_beside_the_workspace() {
        let manager = WorkspaceManager::new("/tmp/bundles");
        assert_eq!(
            manager.archive_path("job-1"),
            PathBuf::from("/tmp/bundles/job-1.zip")
        );
    }
}
