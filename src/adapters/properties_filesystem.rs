use std::fs::{self, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::PropertiesStore;

/// Properties file on disk.
///
/// New content is staged in a temporary file in the scratch directory and then
/// copied over the target, which keeps the target's inode and permissions.
/// The temporary file is removed on every path, including failures.
///
/// No locking is done: only one writer may touch the target at a time.
#[derive(Debug, Clone)]
pub struct FilesystemPropertiesStore {
    path: PathBuf,
    scratch_dir: Option<PathBuf>,
}

impl FilesystemPropertiesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), scratch_dir: None }
    }

    /// Stage rewrites in `dir` instead of the system temp directory.
    pub fn with_scratch_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.scratch_dir = dir;
        self
    }

    fn stage(&self, content: &str) -> Result<NamedTempFile, AppError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("set-property-").suffix(".properties");
        let created = match &self.scratch_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut staged =
            created.map_err(|source| AppError::TempFile { action: "create", source })?;

        staged
            .write_all(content.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(|source| AppError::TempFile { action: "write", source })?;
        staged
            .seek(SeekFrom::Start(0))
            .map_err(|source| AppError::TempFile { action: "rewind", source })?;

        Ok(staged)
    }

    fn property_io(&self, action: &'static str) -> impl FnOnce(io::Error) -> AppError + '_ {
        move |source| AppError::PropertyIo { action, path: self.path.clone(), source }
    }
}

impl PropertiesStore for FilesystemPropertiesStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.property_io("read")(err)),
        }
    }

    fn replace(&self, content: &str) -> Result<(), AppError> {
        let mut staged = self.stage(content)?;

        let mut target = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(self.property_io("open"))?;
        target.set_len(0).map_err(self.property_io("truncate"))?;
        io::copy(staged.as_file_mut(), &mut target).map_err(self.property_io("write"))?;
        target.sync_all().map_err(self.property_io("sync"))?;

        staged.close().map_err(|source| AppError::TempFile { action: "remove", source })
    }
}
