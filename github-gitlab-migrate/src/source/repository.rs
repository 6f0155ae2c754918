//! Source platform record types.

use chrono::{DateTime, Utc};

/// A repository enumerated from the source space.
#[derive(Debug, Clone)]
pub struct SourceRepository {
    /// Repository name.
    pub name: String,

    /// Full qualified name in "owner/name" format.
    pub full_name: String,

    /// HTTPS clone URL.
    pub clone_url: String,

    /// Whether the repository has issues enabled.
    pub has_issues: bool,

    /// Whether the repository claims to have a wiki. Unreliable: the flag can
    /// be set while the underlying wiki repository does not exist.
    pub has_wiki: bool,
}

/// An issue read from the source platform.
#[derive(Debug, Clone)]
pub struct SourceIssue {
    /// Issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body, empty when the source has none.
    pub body: String,
}

/// A single comment of an issue thread.
#[derive(Debug, Clone)]
pub struct SourceComment {
    /// Comment text.
    pub body: String,

    /// Login of the comment author.
    pub author: String,

    /// Comment creation time.
    pub created_at: DateTime<Utc>,
}
