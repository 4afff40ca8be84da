//! Target-independent core of the Zetho admin dashboard.
//!
//! Wire records, moderation helpers and the small state machines behind the
//! views live here so they can be unit tested natively. The `frontend` crate
//! only adds rendering and the browser glue.

pub mod animation;
pub mod classify;
pub mod confirm;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod id;
pub mod latest;
pub mod models;
pub mod mutation;
pub mod paging;
pub mod reports;
pub mod session;
pub mod status;
pub mod text;
pub mod time;

pub use error::{ApiError, ApiResult};
pub use id::RecordId;
pub use status::{ReportAction, ReportStatus, TicketStatus};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::{Context, Result};
    use serde_json::json;

    use crate::{
        filter::{filter_view, StatusFilter},
        models::{LoginResponse, PostReport},
        mutation::{run_optimistic, MutationOptions, Outcome},
        reports::{group_post_reports, set_report_status, ReportBundle},
        session::{MemoryTokenStore, Session, TokenStore},
        ApiError, ReportAction, ReportStatus,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }

    #[test]
    fn login_then_logout_round_trip() -> Result<()> {
        let store = MemoryTokenStore::default();
        let mut session = Session::init(&store);
        assert!(!session.is_authenticated());

        let response: LoginResponse =
            serde_json::from_value(json!({ "success": true, "token": "abc" }))
                .context("login payload should decode")?;
        session
            .apply_login(&response, &store)
            .map_err(anyhow::Error::msg)?;
        assert!(session.is_authenticated());
        assert_eq!(store.load().as_deref(), Some("abc"));

        let rejected: LoginResponse =
            serde_json::from_value(json!({ "success": false, "message": "bad creds" }))?;
        let fresh = MemoryTokenStore::default();
        let mut other = Session::init(&fresh);
        assert_eq!(other.apply_login(&rejected, &fresh), Err("bad creds".to_string()));
        assert_eq!(fresh.load(), None);

        session.logout(&store);
        assert!(!Session::init(&store).is_authenticated());
        Ok(())
    }

    #[tokio::test]
    async fn resolving_one_post_report_leaves_siblings_alone() -> Result<()> {
        init_tracing();

        let payload = json!([
            { "id": "r1", "postId": "p1", "reportedBy": "u1", "reason": "spam" },
            { "id": "r2", "postId": "p1", "reportedBy": "u2", "status": "pending" },
            { "id": "r3", "postId": "p2", "reportedBy": "u1", "status": "resolved" }
        ]);
        let reports: Vec<PostReport> =
            serde_json::from_value(payload).context("post reports should decode")?;
        let groups = group_post_reports(reports);
        let published = RefCell::new(groups.clone());

        let action = ReportAction::Resolve;
        let outcome = run_optimistic(
            &groups,
            MutationOptions::REFETCH,
            |next| set_report_status(next, Some(&"p1".into()), &"r1".into(), action.target_status()),
            || async { Ok::<_, ApiError>(()) },
            |next| *published.borrow_mut() = next,
        )
        .await;
        assert_eq!(outcome, Outcome::Committed { refetch: true });

        let after = published.into_inner();
        let p1 = after
            .iter()
            .find(|group| group.post_id.as_str() == "p1")
            .context("p1 must stay grouped")?;
        let statuses: Vec<_> = p1.reports().iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![ReportStatus::Resolved, ReportStatus::Pending]);
        let p2 = after
            .iter()
            .find(|group| group.post_id.as_str() == "p2")
            .context("p2 must stay grouped")?;
        assert_eq!(p2.reports[0].status, ReportStatus::Resolved);

        let pending = filter_view(&after, "", &StatusFilter::Only(ReportStatus::Pending));
        assert_eq!(pending.len(), 1);
        Ok(())
    }

    #[test]
    fn unknown_report_status_is_a_decode_error() {
        let err = serde_json::from_value::<Vec<PostReport>>(json!([{ "id": "r1", "status": "escalated" }]))
            .map_err(ApiError::from)
            .err();
        assert!(matches!(err, Some(ApiError::Decode(_))));
    }
}
