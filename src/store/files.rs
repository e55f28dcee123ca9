use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{Result, TasqError};
use crate::merge::TaskMap;
use crate::model::{Priority, Task};

/// Root of the .tasq directory: `config.json` plus one pretty-printed
/// JSON document per task under `tasks/`. Tombstones stay on disk as
/// ordinary task files; they are first-class records during sync.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open an existing .tasq directory.
    pub fn open(dir: &Path) -> Result<Self> {
        let root = dir.join(".tasq");
        if !root.join("config.json").exists() {
            return Err(TasqError::NotInitialized);
        }
        Ok(Self { root })
    }

    /// Initialize a new .tasq directory.
    pub fn init(dir: &Path) -> Result<Self> {
        let root = dir.join(".tasq");
        if root.join("config.json").exists() {
            return Err(TasqError::AlreadyInitialized);
        }

        fs::create_dir_all(root.join("tasks"))?;
        fs::write(root.join("config.json"), r#"{"version": 1}"#)?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    fn task_path(&self, id: &str) -> PathBuf {
        self.tasks_dir().join(format!("{id}.json"))
    }

    pub fn create(
        &self,
        title: String,
        description: Option<String>,
        priority: Option<Priority>,
        due_date: Option<DateTime<Utc>>,
        tags: Vec<String>,
    ) -> Result<Task> {
        let mut task = Task::new(title);
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        task.due_date = due_date;
        task.tags = tags.into_iter().collect();
        task.normalize();

        self.write(&task)?;
        Ok(task)
    }

    pub fn read(&self, id: &str) -> Result<Task> {
        let path = self.task_path(id);
        if !path.exists() {
            return Err(TasqError::TaskNotFound(id.to_string()));
        }
        let data = fs::read_to_string(path)?;
        let task: Task = serde_json::from_str(&data)?;
        Ok(task)
    }

    pub fn write(&self, task: &Task) -> Result<()> {
        let json = serde_json::to_string_pretty(task)?;
        fs::write(self.task_path(&task.id), json)?;
        Ok(())
    }

    /// Write every task in the iterator, returning how many were written.
    pub fn write_all<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> Result<usize> {
        let mut written = 0;
        for task in tasks {
            self.write(task)?;
            written += 1;
        }
        Ok(written)
    }

    pub fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(self.tasks_dir())? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".json") {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// All tasks, tombstones included, ordered by creation time.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for id in self.list_ids()? {
            tasks.push(self.read(&id)?);
        }
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(tasks)
    }

    /// The whole collection keyed by id, in the shape the merge engine
    /// consumes.
    pub fn load_map(&self) -> Result<TaskMap> {
        let mut map = TaskMap::new();
        for id in self.list_ids()? {
            let task = self.read(&id)?;
            map.insert(task.id.clone(), task);
        }
        Ok(map)
    }

    /// Resolve a user-supplied id to a stored one: exact match first,
    /// then a unique prefix.
    pub fn resolve_id(&self, input: &str) -> Result<String> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(TasqError::TaskNotFound(input.to_string()));
        }

        let ids = self.list_ids()?;
        if ids.iter().any(|id| id == raw) {
            return Ok(raw.to_string());
        }

        let mut matches: Vec<String> = ids.into_iter().filter(|id| id.starts_with(raw)).collect();
        match matches.len() {
            0 => Err(TasqError::TaskNotFound(raw.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(TasqError::TaskIdAmbiguous(raw.to_string(), matches.join(", "))),
        }
    }
}
