//! Inventory document model.
//!
//! The inventory is held as a whole YAML tree and rewritten in full. `serde_yaml::Mapping`
//! keeps insertion order, so untouched keys come back out where they went in.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::{AppError, HostName, HostVars};

/// Group that host edits target unless configured otherwise.
pub const DEFAULT_GROUP: &str = "alpamayo";

/// Result of writing a host entry into a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostChange {
    Added,
    Replaced,
}

/// A parsed inventory file.
#[derive(Debug, Clone)]
pub struct InventoryDocument {
    origin: PathBuf,
    root: Value,
}

impl InventoryDocument {
    /// Parse inventory YAML. `origin` is only used to label errors.
    pub fn parse(content: &str, origin: impl Into<PathBuf>) -> Result<Self, AppError> {
        let origin = origin.into();
        let root: Value = serde_yaml::from_str(content).map_err(|err| AppError::InventoryParse {
            path: origin.display().to_string(),
            details: err.to_string(),
        })?;
        Ok(Self { origin, root })
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Serialize the whole document, preserving key order.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.root).map_err(|err| AppError::ParseError {
            what: format!("inventory {}", self.origin.display()),
            details: err.to_string(),
        })
    }

    /// Hosts of `group`, if the full `all.children.<group>.hosts` path is present.
    pub fn hosts(&self, group: &str) -> Option<&Mapping> {
        self.root
            .get("all")
            .and_then(|all| all.get("children"))
            .and_then(|children| children.get(group))
            .and_then(|group| group.get("hosts"))
            .and_then(Value::as_mapping)
    }

    /// Variables of one host in `group`.
    pub fn host(&self, group: &str, host: &str) -> Option<&Value> {
        self.hosts(group).and_then(|hosts| hosts.get(host))
    }

    /// Set `all.children.<group>.hosts.<host> = vars`.
    ///
    /// The path must already exist; nothing is created on the way down. An explicit null
    /// `hosts:` entry counts as an empty group.
    pub fn set_host(
        &mut self,
        group: &str,
        host: &HostName,
        vars: HostVars,
    ) -> Result<HostChange, AppError> {
        let hosts = self.existing_hosts_mut(group)?;
        let previous = hosts.insert(Value::String(host.to_string()), vars.into_value());
        Ok(if previous.is_some() { HostChange::Replaced } else { HostChange::Added })
    }

    /// Add `host` to `group`, creating `all`, `children`, the group and its `hosts` as needed.
    ///
    /// Existing variables of a host that is already in the group are left untouched.
    pub fn add_host_to_group(&mut self, group: &str, host: &HostName) -> Result<(), AppError> {
        let origin = self.origin.display().to_string();
        if self.root.is_null() {
            self.root = Value::Mapping(Mapping::new());
        }

        let mut current = &mut self.root;
        let mut walked = String::new();
        for segment in ["all", "children", group, "hosts"] {
            let parent = if walked.is_empty() { "document root".to_string() } else { walked.clone() };
            push_segment(&mut walked, segment);

            let map = match current {
                Value::Mapping(map) => map,
                _ => return Err(AppError::InventoryShape { path: origin, segment: parent }),
            };
            let slot = map
                .entry(Value::String(segment.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if slot.is_null() {
                *slot = Value::Mapping(Mapping::new());
            }
            current = slot;
        }

        match current {
            Value::Mapping(hosts) => {
                let key = Value::String(host.to_string());
                if !hosts.contains_key(&key) {
                    hosts.insert(key, Value::Mapping(Mapping::new()));
                }
                Ok(())
            }
            _ => Err(AppError::InventoryShape { path: origin, segment: walked }),
        }
    }

    fn existing_hosts_mut(&mut self, group: &str) -> Result<&mut Mapping, AppError> {
        let origin = self.origin.display().to_string();
        let mut current = &mut self.root;
        let mut walked = String::new();

        for segment in ["all", "children", group, "hosts"] {
            let parent = if walked.is_empty() { "document root".to_string() } else { walked.clone() };
            push_segment(&mut walked, segment);

            let map = match current {
                Value::Mapping(map) => map,
                Value::Null => {
                    return Err(AppError::InventoryPathMissing { path: origin, segment: walked });
                }
                _ => return Err(AppError::InventoryShape { path: origin, segment: parent }),
            };
            current = match map.get_mut(segment) {
                Some(value) => value,
                None => {
                    return Err(AppError::InventoryPathMissing { path: origin, segment: walked });
                }
            };
        }

        if current.is_null() {
            *current = Value::Mapping(Mapping::new());
        }
        match current {
            Value::Mapping(hosts) => Ok(hosts),
            _ => Err(AppError::InventoryShape { path: origin, segment: walked }),
        }
    }
}

fn push_segment(walked: &mut String, segment: &str) {
    if !walked.is_empty() {
        walked.push('.');
    }
    walked.push_str(segment);
}
