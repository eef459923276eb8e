use crate::archive::ArchiveBuilder;
use crate::emitter;
use crate::model::TranslationModel;
use crate::parser::{self, MediaType};
use crate::utils::{AppConfig, Result};
use crate::workspace::{LocaleDirStatus, WorkspaceManager};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Parsing,
    AllocatingWorkspace,
    PopulatingLocales,
    Archiving,
    Ready,
    CleaningUp,
}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobStage::Parsing => "parsing",
            JobStage::AllocatingWorkspace => "allocating-workspace",
            JobStage::PopulatingLocales => "populating-locales",
            JobStage::Archiving => "archiving",
            JobStage::Ready => "ready",
            JobStage::CleaningUp => "cleaning-up",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    workspaces: WorkspaceManager,
    archiver: ArchiveBuilder,
}

#[derive(Debug)]
pub struct ConversionArtifact {
    job_id: String,
    archive_path: PathBuf,
    workspace_dir: PathBuf,
    workspaces: WorkspaceManager,
}

impl ConversionPipeline {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_temp_root(config.workspace.temp_root.clone())
    }

    pub fn with_temp_root(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            workspaces: WorkspaceManager::new(temp_root),
            archiver: ArchiveBuilder::new(),
        }
    }

    pub async fn convert(
        &self,
        declared_media_type: &str,
        bytes: &[u8],
    ) -> Result<ConversionArtifact> {
        // media-type dispatch happens before any filesystem work
        let media_type = MediaType::from_declared(declared_media_type)?;

        debug!(stage = %JobStage::Parsing, media_type = media_type.as_str(), "parsing input");
        let model = parser::parse(media_type, bytes)?;

        let job_id = Uuid::new_v4().to_string();
        debug!(stage = %JobStage::AllocatingWorkspace, job_id = %job_id, "allocating workspace");
        let workspace_dir = self.workspaces.create_workspace(&job_id).await?;

        match self.populate_and_archive(&job_id, &workspace_dir, &model).await {
            Ok(archive_path) => {
                info!(
                    stage = %JobStage::Ready,
                    job_id = %job_id,
                    locales = model.locale_count(),
                    archive = %archive_path.display(),
                    "conversion complete"
                );
                Ok(ConversionArtifact {
                    job_id,
                    archive_path,
                    workspace_dir,
                    workspaces: self.workspaces.clone(),
                })
            }
            Err(e) => {
                self.workspaces.destroy(&workspace_dir).await;
                remove_if_present(&self.workspaces.archive_path(&job_id)).await;
                Err(e)
            }
        }
    }

    async fn populate_and_archive(
        &self,
        job_id: &str,
        workspace_dir: &Path,
        model: &TranslationModel,
    ) -> Result<PathBuf> {
        debug!(stage = %JobStage::PopulatingLocales, job_id = %job_id, "creating locale directories");
        let reports = self
            .workspaces
            .create_locale_dirs(workspace_dir, model.locale_keys())
            .await;
        let failed = reports
            .iter()
            .filter(|r| matches!(r.status, LocaleDirStatus::Failed(_)))
            .count();
        if failed > 0 {
            warn!(
                job_id = %job_id,
                failed,
                total = reports.len(),
                "some locale directories could not be created"
            );
        }

        // every locale must be on disk before the archive is built
        let emissions = model.locales().map(|(locale, entries)| {
            let dir = workspace_dir.join(locale);
            async move { emitter::emit_locale(&dir, entries).await }
        });
        for result in futures::future::join_all(emissions).await {
            result?;
        }

        debug!(stage = %JobStage::Archiving, job_id = %job_id, "building archive");
        let archive_path = self.workspaces.archive_path(job_id);
        self.archiver.build(workspace_dir, &archive_path).await?;

        Ok(archive_path)
    }
}

impl ConversionArtifact {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    pub async fn cleanup(self) {
        debug!(stage = %JobStage::CleaningUp, job_id = %self.job_id, "removing job artifacts");
        self.workspaces.destroy(&self.workspace_dir).await;
        remove_if_present(&self.archive_path).await;
    }
}

async fn remove_if_present(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove archive"),
    }
}
