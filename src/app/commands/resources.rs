//! Resource discovery: playbooks in the project directory, inventories in the inventory directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::resources::is_playbook_name;
use crate::domain::{AppError, Resources, ServicePaths};

/// List playbooks and inventories under the configured directories.
pub fn discover(paths: &ServicePaths) -> Result<Resources, AppError> {
    let playbooks = list_names(&paths.project_dir, |_, name| is_playbook_name(name))?;
    let inventories =
        list_names(&paths.inventory_dir, |path, name| !name.starts_with('.') && path.is_file())?;
    log::debug!(
        "Discovered {} playbook(s) and {} inventory file(s)",
        playbooks.len(),
        inventories.len()
    );
    Ok(Resources { playbooks, inventories })
}

/// Resolve `requested` inside `dir`, or fall back to the first discovered entry.
///
/// `requested` may be a bare file name or a path; absolute paths are used as-is.
pub fn resolve(
    dir: &Path,
    requested: Option<&str>,
    discovered: &[String],
    kind: &str,
) -> Result<PathBuf, AppError> {
    let name = match requested {
        Some(name) => name,
        None => discovered.first().map(String::as_str).ok_or_else(|| {
            AppError::config_error(format!("No {} found in {}", kind.to_lowercase(), dir.display()))
        })?,
    };

    let path = dir.join(name);
    if !path.is_file() {
        return Err(AppError::ResourceNotFound {
            kind: kind.to_string(),
            name: name.to_string(),
            dir: dir.display().to_string(),
        });
    }
    Ok(path)
}

fn list_names(dir: &Path, keep: impl Fn(&Path, &str) -> bool) -> Result<Vec<String>, AppError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::DirectoryNotFound { path: dir.display().to_string() });
        }
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("Skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        if keep(&entry.path(), &name) {
            names.push(name);
        }
    }
    Ok(names)
}
