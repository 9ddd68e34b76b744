use serde::Serialize;

/// Playbooks and inventories found under the base directory.
///
/// Names are in directory enumeration order; nothing here sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resources {
    pub playbooks: Vec<String>,
    pub inventories: Vec<String>,
}

impl Resources {
    /// A default run needs at least one of each.
    pub fn is_runnable(&self) -> bool {
        !self.playbooks.is_empty() && !self.inventories.is_empty()
    }

    /// Copy with both lists sorted, for stable display.
    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        sorted.playbooks.sort();
        sorted.inventories.sort();
        sorted
    }
}

/// Playbook files are recognised by extension only.
pub fn is_playbook_name(name: &str) -> bool {
    name.ends_with(".yml") || name.ends_with(".yaml")
}
