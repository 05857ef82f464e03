// crates/infra/src/filesystem.rs
use std::{path::PathBuf, sync::Arc};

use codestat_core::LanguageRegistry;
use codestat_domain::FileRecord;
use codestat_ports::ContentSource;
use codestat_shared_kernel::{FilePath, InfrastructureError, Result};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};

use crate::persistence::FileReader;

/// Options for the directory walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    pub roots: Vec<PathBuf>,
    pub hidden: bool,
    pub git_ignore: bool,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    /// Files larger than this are skipped without being read.
    pub max_file_size: Option<u64>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            max_file_size: None,
        }
    }
}

/// Walks the roots honouring ignore files and loads every file whose
/// language the registry knows.
///
/// Unreadable files and walk errors are logged and skipped; only a missing
/// root aborts the walk.
pub struct FsContentSource {
    options: WalkOptions,
    registry: Arc<LanguageRegistry>,
}

impl FsContentSource {
    pub fn new(options: WalkOptions, registry: Arc<LanguageRegistry>) -> Self {
        Self { options, registry }
    }

    fn builder(&self) -> Option<WalkBuilder> {
        let (first, rest) = self.options.roots.split_first()?;
        let mut builder = WalkBuilder::new(first);
        for root in rest {
            builder.add(root);
        }

        builder
            .hidden(!self.options.hidden)
            .git_ignore(self.options.git_ignore)
            .follow_links(self.options.follow_links)
            .max_depth(self.options.max_depth)
            // 提出順を安定させる
            .sort_by_file_name(|a, b| a.cmp(b));
        Some(builder)
    }

    fn check_roots(&self) -> Result<()> {
        for root in &self.options.roots {
            if !root.exists() {
                return Err(InfrastructureError::Walk {
                    details: format!("path not found: {}", root.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl ContentSource for FsContentSource {
    fn visit(&self, visitor: &mut dyn FnMut(FileRecord) -> Result<()>) -> Result<usize> {
        self.check_roots()?;
        let Some(builder) = self.builder() else {
            return Ok(0);
        };

        let mut count = 0;
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("walk error: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = FilePath::from(entry.path());
            let Some(language) = self.registry.detect(&path) else {
                log::debug!("skipping {path}: no language for extension '{}'", path.extension());
                continue;
            };

            let size = entry.metadata().ok().map(|m| m.len());
            if let (Some(max), Some(size)) = (self.options.max_file_size, size)
                && size > max
            {
                log::debug!("skipping {path}: {size} bytes exceeds limit of {max}");
                continue;
            }

            let content = match FileReader::read_to_end(entry.path(), size) {
                Ok(content) => content,
                Err(source) => {
                    let err = InfrastructureError::FileRead { path: entry.path().to_path_buf(), source };
                    log::warn!("{err}");
                    continue;
                }
            };

            visitor(FileRecord::new(path, language.name.clone(), content))?;
            count += 1;
        }

        Ok(count)
    }
}
