//! Filter-driven list loading shared by the four list screens.
//!
//! The filter is the only input of a fetch. Every effective filter change and
//! every explicit refetch issues a new [`FetchTicket`]; a response is applied
//! only while its ticket is the latest one, so a slow earlier response can
//! never overwrite a later one.

use crate::{api::ApiError, models::ListFilter};
use leptos::*;
use std::{future::Future, pin::Pin, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest<F> {
    pub ticket: FetchTicket,
    pub filter: F,
}

#[derive(Debug, Clone)]
pub struct ListController<F> {
    filter: F,
    issued: u64,
}

impl<F: ListFilter> ListController<F> {
    pub fn new(filter: F) -> Self {
        Self { filter, issued: 0 }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn refetch(&mut self) -> FetchRequest<F> {
        self.issued += 1;
        FetchRequest {
            ticket: FetchTicket(self.issued),
            filter: self.filter.clone(),
        }
    }

    /// Applies `change` and returns the fetch to run, or `None` when the
    /// filter ends up unchanged.
    pub fn change(&mut self, change: impl FnOnce(&mut F)) -> Option<FetchRequest<F>> {
        let mut next = self.filter.clone();
        change(&mut next);
        self.replace(next)
    }

    pub fn replace(&mut self, filter: F) -> Option<FetchRequest<F>> {
        if filter == self.filter {
            return None;
        }
        self.filter = filter;
        Some(self.refetch())
    }

    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(error) => {
                self.rows.clear();
                self.error = Some(error);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.rows.is_empty()
    }
}

type ListFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ApiError>>>>;
type FetchFn<F, T> = Rc<dyn Fn(F) -> ListFuture<T>>;

/// Reactive wrapper around [`ListController`] owned by a list screen.
pub struct ListHandle<F: 'static, T: 'static> {
    controller: StoredValue<ListController<F>>,
    filter: RwSignal<F>,
    state: RwSignal<ListState<T>>,
    fetch: StoredValue<FetchFn<F, T>>,
}

impl<F: 'static, T: 'static> Clone for ListHandle<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static, T: 'static> Copy for ListHandle<F, T> {}

impl<F: ListFilter, T: Clone + 'static> ListHandle<F, T> {
    pub fn new<Fut>(initial: F, fetch: impl Fn(F) -> Fut + 'static) -> Self
    where
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let fetch: FetchFn<F, T> = Rc::new(move |filter| Box::pin(fetch(filter)));
        Self {
            controller: store_value(ListController::new(initial.clone())),
            filter: create_rw_signal(initial),
            state: create_rw_signal(ListState::default()),
            fetch: store_value(fetch),
        }
    }

    pub fn filter(&self) -> Signal<F> {
        self.filter.into()
    }

    pub fn state(&self) -> ReadSignal<ListState<T>> {
        self.state.read_only()
    }

    pub fn rows(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.rows.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    /// Fetches with the current filter; used on mount and after mutations.
    pub fn refetch(&self) {
        if let Some(request) = self.controller.try_update_value(|c| c.refetch()) {
            self.start(request);
        }
    }

    /// Mutates the filter; fetches once if it actually changed.
    pub fn change_filter(&self, change: impl FnOnce(&mut F)) -> bool {
        match self.controller.try_update_value(|c| c.change(change)).flatten() {
            Some(request) => {
                self.filter.set(request.filter.clone());
                self.start(request);
                true
            }
            None => false,
        }
    }

    fn start(&self, request: FetchRequest<F>) {
        let FetchRequest { ticket, filter } = request;
        self.state.update(ListState::begin);
        let Some(future) = self.fetch.try_with_value(|fetch| fetch(filter)) else {
            return;
        };
        let controller = self.controller;
        let state = self.state;
        spawn_local(async move {
            let result = future.await;
            match controller.try_with_value(|c| c.accepts(ticket)) {
                Some(true) => {
                    state.try_update(|s| s.finish(result));
                }
                Some(false) => log::debug!("dropping superseded list response"),
                None => log::debug!("list closed before its response arrived"),
            }
        });
    }
}
