//! Task store - in-memory task list mirrored to a CSV file

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::csv;
use super::error::{Result, StoreError};
use super::model::{Task, TaskId, TaskStats, TaskStatus};

#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Copy the previous file to `<file>.bak` before each write
    pub backup: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { backup: true }
    }
}

/// The authoritative task list.
///
/// Every mutation is persisted before it becomes visible: the next list is
/// written to disk first and only swapped in once the write succeeded.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
    options: StoreOptions,
}

impl TaskStore {
    /// Read tasks from `path`. A missing or empty file is an empty list.
    pub fn load(path: &Path) -> Result<Vec<Task>> {
        Ok(assign_ids(read_rows(path)?, 1))
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(path, StoreOptions::default())
    }

    pub fn open_with(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let path = path.into();
        let tasks = Self::load(&path)?;
        debug!("Loaded {} tasks from {}", tasks.len(), path.display());

        Ok(Self {
            next_id: tasks.len() as u64 + 1,
            path,
            tasks,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Append a pending task. Blank text is rejected without touching disk.
    pub fn add(&mut self, text: impl Into<String>) -> Result<TaskId> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(StoreError::Validation(
                "task text must not be empty".to_string(),
            ));
        }

        let id = TaskId(self.next_id);
        let mut next = self.tasks.clone();
        next.push(Task::new(id, text));
        self.commit(next)?;
        self.next_id += 1;

        info!("Added task {}", id);
        Ok(id)
    }

    /// Set the status of the task at `index`. Setting the current status
    /// again is a no-op and does not rewrite the file.
    pub fn set_status(&mut self, index: usize, status: TaskStatus) -> Result<()> {
        self.check_index(index)?;

        if self.tasks[index].status == status {
            debug!("Task {} already {}", self.tasks[index].id, status);
            return Ok(());
        }

        let mut next = self.tasks.clone();
        next[index].status = status;
        self.commit(next)?;

        info!("Task {} marked {}", self.tasks[index].id, status);
        Ok(())
    }

    /// Flip the task at `index` between pending and completed.
    pub fn toggle(&mut self, index: usize) -> Result<TaskStatus> {
        self.check_index(index)?;
        let status = self.tasks[index].status.toggled();
        self.set_status(index, status)?;
        Ok(status)
    }

    /// Remove the task at `index`; later tasks move up one position.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;

        let mut next = self.tasks.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Deleted task {}", removed.id);
        Ok(removed)
    }

    pub fn set_status_by_id(&mut self, id: TaskId, status: TaskStatus) -> Result<()> {
        let index = self.position(id).ok_or(StoreError::UnknownTask(id))?;
        self.set_status(index, status)
    }

    pub fn delete_by_id(&mut self, id: TaskId) -> Result<Task> {
        let index = self.position(id).ok_or(StoreError::UnknownTask(id))?;
        self.delete(index)
    }

    /// Replace in-memory state with the file's current content.
    ///
    /// Reloaded tasks get fresh ids, so ids held from before the reload no
    /// longer resolve.
    pub fn reload(&mut self) -> Result<()> {
        let rows = read_rows(&self.path)?;
        let count = rows.len() as u64;
        self.tasks = assign_ids(rows, self.next_id);
        self.next_id += count;
        debug!("Reloaded {} tasks from {}", count, self.path.display());
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.persist(&next)?;
        self.tasks = next;
        Ok(())
    }

    fn persist(&self, tasks: &[Task]) -> Result<()> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let lock_path = sidecar(&self.path, "lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| StoreError::io(&lock_path, e))?;
        FileExt::lock_exclusive(&lock_file).map_err(|source| StoreError::Lock {
            path: lock_path.clone(),
            source,
        })?;

        let result = self.write_locked(tasks, &dir);

        if let Err(e) = FileExt::unlock(&lock_file) {
            warn!("Failed to release {}: {}", lock_path.display(), e);
        }
        result
    }

    fn write_locked(&self, tasks: &[Task], dir: &Path) -> Result<()> {
        if self.options.backup && self.path.is_file() {
            let backup_path = sidecar(&self.path, "bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = csv::encode(tasks);
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!("Wrote {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

fn read_rows(path: &Path) -> Result<Vec<csv::Row>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        StoreError::Malformed {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
            reason: "file is not valid UTF-8".to_string(),
        }
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    csv::decode(&content).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        line: e.line,
        reason: e.reason,
    })
}

fn assign_ids(rows: Vec<csv::Row>, first: u64) -> Vec<Task> {
    rows.into_iter()
        .zip(first..)
        .map(|(row, n)| Task {
            id: TaskId(n),
            text: row.text,
            status: row.status,
        })
        .collect()
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `tasks.csv` -> `tasks.csv.<suffix>`
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
