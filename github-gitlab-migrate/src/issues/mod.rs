//! Issue translation.
//!
//! The destination API offers no way to recreate individual comments, so
//! each issue's comment thread is flattened into the issue body: original
//! body, a footer header, then one block per comment with text, author and
//! timestamp. This is a lossy, one-way translation.

use crate::destination::{DestinationHost, Project};
use crate::source::{SourceComment, SourceError, SourceHost, SourceRepository};
use tracing::{error, info, info_span, Instrument};

/// Header line separating the original body from imported comments.
const COMMENTS_HEADER: &str = "\n\n\nComments from GitHub import:\n";

/// Counts of issue creations for one repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueReport {
    /// Issues successfully created on the destination.
    pub created: usize,

    /// Issues whose comment fetch or creation failed.
    pub failed: usize,
}

/// Recreates every issue of a repository on the destination project.
///
/// Issues are processed in listing order. A failure on a single issue is
/// logged and counted; the remaining issues still migrate.
///
/// # Errors
///
/// Returns [`SourceError`] when the issue listing itself fails.
pub async fn translate_issues(
    source: &dyn SourceHost,
    destination: &dyn DestinationHost,
    repository: &SourceRepository,
    project: &Project,
) -> Result<IssueReport, SourceError> {
    let span = info_span!("translate_issues", repo = %repository.full_name);

    async {
        let issues = source.list_issues(&repository.full_name).await?;
        info!(count = issues.len(), "Translating issues");

        let mut report = IssueReport::default();
        for issue in &issues {
            let comments = match source
                .list_issue_comments(&repository.full_name, issue.number)
                .await
            {
                Ok(comments) => comments,
                Err(e) => {
                    error!(issue = issue.number, error = %e, "Failed to fetch comments");
                    report.failed += 1;
                    continue;
                }
            };

            let body = flatten_issue_body(&issue.body, &comments);
            match destination.create_issue(project.id, &issue.title, &body).await {
                Ok(()) => report.created += 1,
                Err(e) => {
                    error!(issue = issue.number, error = %e, "Failed to create issue");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
    .instrument(span)
    .await
}

/// Appends the serialized comment thread to an issue body.
///
/// With no comments the body is returned verbatim. Otherwise a footer header
/// follows the body, then one blank-line-separated block per comment in
/// original order.
pub fn flatten_issue_body(body: &str, comments: &[SourceComment]) -> String {
    if comments.is_empty() {
        return body.to_string();
    }

    let mut flattened = String::from(body);
    flattened.push_str(COMMENTS_HEADER);
    for comment in comments {
        flattened.push_str(&format!(
            "\n\n{}\nBy {} on {}",
            comment.body,
            comment.author,
            comment.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn comment(body: &str, author: &str, hour: u32) -> SourceComment {
        SourceComment {
            body: body.to_string(),
            author: author.to_string(),
            created_at: Utc.with_ymd_and_hms(2014, 5, 3, hour, 30, 0).unwrap(),
        }
    }

    #[test]
    fn body_without_comments_is_verbatim() {
        assert_eq!(flatten_issue_body("original body", &[]), "original body");
    }

    #[test]
    fn comments_are_appended_in_order() {
        let comments = vec![
            comment("first reply", "alice", 9),
            comment("second reply", "bob", 11),
        ];
        let body = flatten_issue_body("original body", &comments);

        assert_eq!(
            body,
            "original body\n\n\nComments from GitHub import:\n\
             \n\nfirst reply\nBy alice on 2014-05-03 09:30:00 UTC\
             \n\nsecond reply\nBy bob on 2014-05-03 11:30:00 UTC"
        );
    }

    #[test]
    fn empty_source_body_still_gets_footer() {
        let comments = vec![comment("only comment", "carol", 8)];
        let body = flatten_issue_body("", &comments);

        assert!(body.starts_with("\n\n\nComments from GitHub import:\n"));
        assert!(body.ends_with("By carol on 2014-05-03 08:30:00 UTC"));
    }
}
