//! Destination platform record types.

use serde::Deserialize;

/// A destination namespace container that owns migrated projects.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    /// Group identifier.
    pub id: u64,

    /// Group display name.
    pub name: String,
}

/// A destination project, the equivalent of a source repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: u64,

    /// SSH URL used for pushing refs.
    pub ssh_url_to_repo: String,

    /// Web URL of the project.
    pub web_url: String,
}
