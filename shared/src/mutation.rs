//! Optimistic mutations with all-or-nothing rollback.
//!
//! The local collection is changed first and shown immediately. If the
//! remote call fails, the exact pre-mutation snapshot is put back.

use std::{fmt::Display, future::Future};

/// Per-call-site behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationOptions {
    /// Re-fetch the collection after a successful call instead of trusting
    /// the local update.
    pub confirm_by_refetch: bool,
}

impl MutationOptions {
    /// Trust the local update after success.
    pub const LOCAL: MutationOptions = MutationOptions {
        confirm_by_refetch: false,
    };
    /// Re-fetch after success.
    pub const REFETCH: MutationOptions = MutationOptions {
        confirm_by_refetch: true,
    };
}

/// How an optimistic mutation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    /// The local change did not apply (unknown record, refused transition);
    /// nothing was sent.
    Skipped,
    /// The backend accepted the change.
    Committed {
        /// Caller should re-fetch the collection.
        refetch: bool,
    },
    /// The backend rejected the change; `restored` is the snapshot taken
    /// before the local update.
    RolledBack {
        /// Collection as it was before the mutation.
        restored: Vec<T>,
        /// Why the remote call failed.
        error: E,
    },
}

/// An in-flight optimistic change holding its rollback snapshot.
#[derive(Debug, Clone)]
pub struct Optimistic<T> {
    snapshot: Vec<T>,
    options: MutationOptions,
}

impl<T: Clone> Optimistic<T> {
    /// Snapshots `current` and returns the locally updated copy.
    ///
    /// Returns `None` when `apply` reports that it changed nothing.
    pub fn begin<F>(current: &[T], options: MutationOptions, apply: F) -> Option<(Self, Vec<T>)>
    where
        F: FnOnce(&mut Vec<T>) -> bool,
    {
        let snapshot = current.to_vec();
        let mut updated = snapshot.clone();
        if !apply(&mut updated) {
            return None;
        }
        Some((
            Optimistic {
                snapshot,
                options,
            },
            updated,
        ))
    }

    /// The collection as it was before the change.
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    /// Resolves the mutation with the remote result.
    pub fn settle<R, E>(self, result: Result<R, E>) -> Outcome<T, E> {
        match result {
            Ok(_) => Outcome::Committed {
                refetch: self.options.confirm_by_refetch,
            },
            Err(error) => Outcome::RolledBack {
                restored: self.snapshot,
                error,
            },
        }
    }
}

/// Drives a full optimistic mutation.
///
/// `publish` is called with the locally updated collection before the remote
/// call is issued, and again with the snapshot if the call fails.
pub async fn run_optimistic<T, R, E, A, C, Fut, P>(
    current: &[T],
    options: MutationOptions,
    apply: A,
    remote: C,
    publish: P,
) -> Outcome<T, E>
where
    T: Clone,
    E: Display,
    A: FnOnce(&mut Vec<T>) -> bool,
    C: FnOnce() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    P: Fn(Vec<T>),
{
    let Some((pending, updated)) = Optimistic::begin(current, options, apply) else {
        return Outcome::Skipped;
    };
    publish(updated);

    let outcome = pending.settle(remote().await);
    if let Outcome::RolledBack {
        restored,
        error,
    } = &outcome
    {
        tracing::warn!(error = %error, "remote mutation failed, restoring snapshot");
        publish(restored.clone());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        error::ApiError,
        models::PostReport,
        reports::{group_post_reports, set_report_status, PostReportGroup},
        status::ReportStatus,
    };

    fn sample() -> Vec<PostReportGroup> {
        group_post_reports(vec![
            PostReport {
                id: "r1".into(),
                post_id: "p1".into(),
                reported_by: "u1".into(),
                ..PostReport::default()
            },
            PostReport {
                id: "r2".into(),
                post_id: "p1".into(),
                reported_by: "u2".into(),
                ..PostReport::default()
            },
        ])
    }

    fn resolve_r1(groups: &mut Vec<PostReportGroup>) -> bool {
        set_report_status(groups, Some(&"p1".into()), &"r1".into(), ReportStatus::Resolved)
    }

    #[tokio::test]
    async fn success_keeps_local_update() {
        let current = sample();
        let published = RefCell::new(Vec::new());

        let outcome = run_optimistic(
            &current,
            MutationOptions::LOCAL,
            resolve_r1,
            || async { Ok::<_, ApiError>(()) },
            |next| published.borrow_mut().push(next),
        )
        .await;

        assert_eq!(outcome, Outcome::Committed { refetch: false });
        let published = published.into_inner();
        assert_eq!(published.len(), 1);

        let mut expected = current.clone();
        assert!(resolve_r1(&mut expected));
        assert_eq!(published[0], expected);
    }

    #[tokio::test]
    async fn failure_restores_exact_snapshot() {
        let current = sample();
        let published = RefCell::new(Vec::new());

        let outcome = run_optimistic(
            &current,
            MutationOptions::LOCAL,
            resolve_r1,
            || async { Err::<(), _>(ApiError::Http { status: 500 }) },
            |next| published.borrow_mut().push(next),
        )
        .await;

        match outcome {
            Outcome::RolledBack {
                restored,
                error,
            } => {
                assert_eq!(restored, current);
                assert_eq!(error, ApiError::Http { status: 500 });
            },
            other => panic!("expected rollback, got {other:?}"),
        }

        let published = published.into_inner();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0][0].reports[0].status, ReportStatus::Resolved);
        assert_eq!(published[1], current);
    }

    #[tokio::test]
    async fn refetch_option_is_reported_on_commit() {
        let outcome = run_optimistic(
            &sample(),
            MutationOptions::REFETCH,
            resolve_r1,
            || async { Ok::<_, ApiError>(()) },
            |_| {},
        )
        .await;
        assert_eq!(outcome, Outcome::Committed { refetch: true });
    }

    #[tokio::test]
    async fn noop_apply_skips_remote_call() {
        let called = RefCell::new(false);
        let outcome = run_optimistic(
            &sample(),
            MutationOptions::LOCAL,
            |_: &mut Vec<PostReportGroup>| false,
            || {
                *called.borrow_mut() = true;
                async { Ok::<_, ApiError>(()) }
            },
            |_| panic!("nothing should be published"),
        )
        .await;

        assert_eq!(outcome, Outcome::Skipped);
        assert!(!*called.borrow());
    }

    #[test]
    fn settle_without_driver() {
        let current = vec![1, 2, 3];
        let (pending, updated) = Optimistic::begin(&current, MutationOptions::LOCAL, |items| {
            items.retain(|n| *n != 2);
            true
        })
        .unwrap();
        assert_eq!(updated, vec![1, 3]);
        assert_eq!(pending.snapshot(), &[1, 2, 3]);

        match pending.settle::<(), _>(Err("boom")) {
            Outcome::RolledBack {
                restored,
                ..
            } => assert_eq!(restored, current),
            other => panic!("unexpected {other:?}"),
        }
    }
}
