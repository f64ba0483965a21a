use std::fs;
use std::path::PathBuf;

use atn_core::errors::{AtnError, ErrorInfo};
use tracing::debug;
use walkdir::WalkDir;

use crate::descriptor::Descriptor;
use crate::layout::{ArtifactKind, Scope};

/// A resolved numbered artifact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    pub kind: ArtifactKind,
    pub id: u64,
    pub path: PathBuf,
}

/// Allocation and lookup of numbered artifacts.
///
/// Implementations assume a single writer per scope; two processes
/// allocating in the same scope at once may be handed the same id, and the
/// loser's `create` then fails with `AlreadyExists`.
pub trait ArtifactRepository {
    /// One more than the largest existing id in the scope, or 0. Creates
    /// nothing.
    fn allocate_next(&self, scope: &Scope) -> Result<u64, AtnError>;

    /// Creates the numbered directory and persists its descriptor.
    fn create(&self, scope: &Scope, id: u64, descriptor: &Descriptor) -> Result<ArtifactHandle, AtnError>;

    /// Resolves an existing numbered directory.
    fn locate(&self, scope: &Scope, id: u64) -> Result<ArtifactHandle, AtnError>;

    fn create_next(&self, scope: &Scope, descriptor: &Descriptor) -> Result<ArtifactHandle, AtnError> {
        let id = self.allocate_next(scope)?;
        self.create(scope, id, descriptor)
    }
}

/// Numbering by scanning the scope directory for the largest suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirScanRepository;

impl DirScanRepository {
    /// Ids present in the scope, ascending.
    pub fn existing_ids(&self, scope: &Scope) -> Result<Vec<u64>, AtnError> {
        if !scope.root.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in WalkDir::new(&scope.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| {
                AtnError::Io(
                    ErrorInfo::new("scope-scan", err.to_string())
                        .with_context("path", scope.root.display().to_string()),
                )
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if let Some(id) = entry
                .file_name()
                .to_str()
                .and_then(|name| scope.kind.parse_dir_name(name))
            {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}

impl ArtifactRepository for DirScanRepository {
    fn allocate_next(&self, scope: &Scope) -> Result<u64, AtnError> {
        let next = self
            .existing_ids(scope)?
            .last()
            .map_or(0, |max| max + 1);
        debug!(kind = %scope.kind, root = %scope.root.display(), next, "allocated id");
        Ok(next)
    }

    fn create(&self, scope: &Scope, id: u64, descriptor: &Descriptor) -> Result<ArtifactHandle, AtnError> {
        fs::create_dir_all(&scope.root)
            .map_err(|err| AtnError::from_io("scope-create", &scope.root, err))?;
        let path = scope.path_of(id);
        fs::create_dir(&path).map_err(|err| AtnError::from_io("artifact-create", &path, err))?;
        if let Err(err) = descriptor.write_to(&path) {
            let _ = fs::remove_dir_all(&path);
            return Err(err);
        }
        debug!(kind = %scope.kind, id, path = %path.display(), "created artifact");
        Ok(ArtifactHandle {
            kind: scope.kind,
            id,
            path,
        })
    }

    fn locate(&self, scope: &Scope, id: u64) -> Result<ArtifactHandle, AtnError> {
        let path = scope.path_of(id);
        let metadata =
            fs::metadata(&path).map_err(|err| AtnError::from_io("artifact-locate", &path, err))?;
        if !metadata.is_dir() {
            return Err(AtnError::NotFound(
                ErrorInfo::new("artifact-locate", "path exists but is not a directory")
                    .with_context("path", path.display().to_string()),
            ));
        }
        Ok(ArtifactHandle {
            kind: scope.kind,
            id,
            path,
        })
    }
}
