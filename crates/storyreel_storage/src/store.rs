//! Project store backed by the local filesystem.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use storyreel_core::{ChatMessage, Project, ProjectRequirements, StoryRecord};
use storyreel_error::{StorageError, StorageErrorKind, StoryreelResult};
use uuid::Uuid;

/// Filesystem store for projects, chat histories, and story records.
///
/// Each operation is independent; no state is held between calls beyond the
/// base path, so one store can be shared freely across request handlers.
pub struct ProjectStore {
    base_path: PathBuf,
}

impl ProjectStore {
    /// Create a store rooted at `base_path`.
    ///
    /// Creates the projects directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StoryreelResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(base_path.join("projects")).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened project store");
        Ok(Self { base_path })
    }

    /// Create a project, validate its requirements, and persist it.
    ///
    /// Assigns a fresh UUID and creation timestamp.
    #[tracing::instrument(skip_all)]
    pub async fn create_project(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        requirements: Option<ProjectRequirements>,
    ) -> StoryreelResult<Project> {
        if let Some(reqs) = &requirements {
            reqs.validate()?;
        }

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description,
            requirements,
            stories: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.write_json(&self.project_file(&project.id)?, &project)
            .await?;

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    /// Load a project by ID.
    pub async fn load_project(&self, project_id: &str) -> StoryreelResult<Project> {
        self.read_json(&self.project_file(project_id)?).await
    }

    /// List every stored project, sorted by creation time.
    pub async fn list_projects(&self) -> StoryreelResult<Vec<Project>> {
        let projects_dir = self.base_path.join("projects");
        let mut entries = tokio::fs::read_dir(&projects_dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                projects_dir.display(),
                e
            )))
        })?;

        let mut projects = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                projects_dir.display(),
                e
            )))
        })? {
            let manifest = entry.path().join("project.json");
            if tokio::fs::try_exists(&manifest).await.unwrap_or(false) {
                projects.push(self.read_json::<Project>(&manifest).await?);
            }
        }

        projects.sort_by_key(|p| p.created_at);
        Ok(projects)
    }

    /// Persist changes to an existing project, bumping its update
    /// timestamp. Requirements are re-validated.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the project was never created.
    #[tracing::instrument(skip(self, project), fields(project_id = %project.id))]
    pub async fn update_project(&self, mut project: Project) -> StoryreelResult<Project> {
        let path = self.project_file(&project.id)?;
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::new(StorageErrorKind::NotFound(project.id.clone())).into());
        }

        if let Some(reqs) = &project.requirements {
            reqs.validate()?;
        }

        project.updated_at = Some(Utc::now());
        self.write_json(&path, &project).await?;
        Ok(project)
    }

    /// Delete a project and everything stored under it.
    #[tracing::instrument(skip(self))]
    pub async fn delete_project(&self, project_id: &str) -> StoryreelResult<()> {
        let dir = self.project_dir(project_id)?;
        tokio::fs::remove_dir_all(&dir).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(project_id.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "delete {}: {}",
                    dir.display(),
                    e
                )))
            }
        })?;

        tracing::info!(project_id, "Deleted project");
        Ok(())
    }

    /// Persist a project's full conversation history.
    pub async fn save_chat(
        &self,
        project_id: &str,
        messages: &[ChatMessage],
    ) -> StoryreelResult<()> {
        let path = self.project_dir(project_id)?.join("chat.json");
        self.write_json(&path, &messages).await
    }

    /// Load a project's conversation history.
    ///
    /// A project with no saved chat yet loads as an empty history.
    pub async fn load_chat(&self, project_id: &str) -> StoryreelResult<Vec<ChatMessage>> {
        let path = self.project_dir(project_id)?.join("chat.json");
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }
        self.read_json(&path).await
    }

    /// Persist a batch of story records for a project.
    ///
    /// Assigns each record a timestamp-based ID, writes one file per
    /// record, appends the IDs to the project manifest, and returns them in
    /// record order.
    #[tracing::instrument(skip(self, records), fields(count = records.len()))]
    pub async fn save_stories(
        &self,
        project_id: &str,
        records: &[StoryRecord],
    ) -> StoryreelResult<Vec<String>> {
        let mut project = self.load_project(project_id).await?;
        let stories_dir = self.project_dir(project_id)?.join("stories");

        let batch_millis = Utc::now().timestamp_millis();
        let mut ids = Vec::with_capacity(records.len());

        // The sequence continues from the manifest length so two batches
        // landing in the same millisecond still get distinct IDs.
        for (index, record) in records.iter().enumerate() {
            let story_id = format!(
                "story_{}_{}",
                batch_millis,
                project.stories.len() + index + 1
            );
            self.write_json(&stories_dir.join(format!("{story_id}.json")), record)
                .await?;
            ids.push(story_id);
        }

        project.stories.extend(ids.iter().cloned());
        project.updated_at = Some(Utc::now());
        self.write_json(&self.project_file(project_id)?, &project)
            .await?;

        tracing::info!(project_id, stories = ids.len(), "Saved story records");
        Ok(ids)
    }

    /// Load one story record.
    pub async fn load_story(
        &self,
        project_id: &str,
        story_id: &str,
    ) -> StoryreelResult<StoryRecord> {
        check_id(story_id)?;
        let path = self
            .project_dir(project_id)?
            .join("stories")
            .join(format!("{story_id}.json"));
        self.read_json(&path).await
    }

    /// Load every story record for a project, in manifest order.
    pub async fn list_stories(&self, project_id: &str) -> StoryreelResult<Vec<StoryRecord>> {
        let project = self.load_project(project_id).await?;
        let mut records = Vec::with_capacity(project.stories.len());
        for story_id in &project.stories {
            records.push(self.load_story(project_id, story_id).await?);
        }
        Ok(records)
    }

    fn project_dir(&self, project_id: &str) -> StoryreelResult<PathBuf> {
        check_id(project_id)?;
        Ok(self.base_path.join("projects").join(project_id))
    }

    fn project_file(&self, project_id: &str) -> StoryreelResult<PathBuf> {
        Ok(self.project_dir(project_id)?.join("project.json"))
    }

    /// Write a record atomically: temp file first, then rename.
    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> StoryreelResult<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> StoryreelResult<T> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())).into())
    }
}

/// Reject identifiers that could escape the store's directory tree.
fn check_id(id: &str) -> Result<(), StorageError> {
    if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
        return Err(StorageError::new(StorageErrorKind::InvalidId(
            id.to_string(),
        )));
    }
    Ok(())
}
