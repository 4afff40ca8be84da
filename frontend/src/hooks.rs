use std::{fmt::Display, future::Future, rc::Rc};

use yew::prelude::*;
use zetho_admin_shared::{
    error::ApiResult,
    latest::LatestRequest,
    mutation::{run_optimistic, MutationOptions, Outcome},
    paging::PageWindow,
};

use crate::logging;

/// Page state over a list of `len` items.
///
/// Returns the clamped window and a setter taking 1-based page numbers.
/// Shrinking the list keeps the view on its last page.
#[hook]
pub fn use_page_window(len: usize, page_size: usize) -> (PageWindow, Callback<usize>) {
    let requested = use_state(|| 1_usize);
    let window = PageWindow::new(len, page_size, *requested);
    let go_to = {
        let requested = requested.clone();
        Callback::from(move |page: usize| requested.set(page.clamp(1, window.pages)))
    };
    (window, go_to)
}

/// Lifecycle of one remote collection.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    /// First fetch still in flight.
    Loading,
    /// Fixed, user-facing failure text.
    Failed(String),
    /// Last successful response, possibly updated locally since.
    Loaded(T),
}

/// Handle returned by [`use_remote`].
#[derive(Clone, PartialEq)]
pub struct RemoteHandle<T> {
    state: UseStateHandle<RemoteState<T>>,
    /// Re-issues the fetch without going back to the loading state.
    pub reload: Callback<()>,
}

impl<T: 'static> RemoteHandle<T> {
    pub fn state(&self) -> &RemoteState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &*self.state {
            RemoteState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Replaces the loaded value, e.g. with an optimistic update.
    pub fn set(&self, data: T) {
        self.state.set(RemoteState::Loaded(data));
    }
}

/// Fetches once on mount and exposes the result.
///
/// Responses that arrive after unmount, or after a newer request was issued,
/// are dropped. Any error becomes `failure_message`; the detail goes to the
/// console.
#[hook]
pub fn use_remote<T, F, Fut>(fetch: F, failure_message: &'static str) -> RemoteHandle<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let state = use_state(|| RemoteState::<T>::Loading);
    let latest = use_mut_ref(LatestRequest::default);
    let fetch = Rc::new(fetch);

    let reload = {
        let state = state.clone();
        let latest = latest.clone();
        Callback::from(move |_: ()| {
            let ticket = latest.borrow_mut().begin();
            let state = state.clone();
            let latest = latest.clone();
            let pending = (*fetch)();
            wasm_bindgen_futures::spawn_local(async move {
                let result = pending.await;
                if !latest.borrow().accepts(ticket) {
                    return;
                }
                match result {
                    Ok(data) => state.set(RemoteState::Loaded(data)),
                    Err(err) => {
                        logging::error(failure_message, &err);
                        state.set(RemoteState::Failed(failure_message.to_string()));
                    },
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            move || latest.borrow_mut().close()
        });
    }

    RemoteHandle {
        state,
        reload,
    }
}

/// Applies `apply` to the loaded collection right away, then calls `remote`.
///
/// On failure the pre-mutation snapshot is put back and `on_error` receives
/// the error. With [`MutationOptions::REFETCH`] a successful call triggers a
/// reload.
pub fn spawn_optimistic<T, R, E, A, C, Fut>(
    handle: &RemoteHandle<Vec<T>>,
    options: MutationOptions,
    apply: A,
    remote: C,
    on_error: Callback<E>,
) where
    T: Clone + 'static,
    R: 'static,
    E: Display + 'static,
    A: FnOnce(&mut Vec<T>) -> bool + 'static,
    C: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<R, E>> + 'static,
{
    let Some(current) = handle.data().cloned() else {
        return;
    };
    let handle = handle.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let publish = {
            let handle = handle.clone();
            move |next: Vec<T>| handle.set(next)
        };
        match run_optimistic(&current, options, apply, remote, publish).await {
            Outcome::Committed {
                refetch: true,
            } => handle.reload.emit(()),
            Outcome::Committed {
                refetch: false,
            }
            | Outcome::Skipped => {},
            Outcome::RolledBack {
                error, ..
            } => {
                logging::error("mutation rolled back", &error);
                on_error.emit(error);
            },
        }
    });
}
