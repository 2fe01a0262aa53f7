//! Pagination and search state around one paginated resource.
//!
//! The controller owns `page`, the raw `search` text, and the debounced term
//! actually sent to the server; the query key is
//! `[resource, page, debounced_search, limit]` and any component change
//! triggers a new fetch through the cache. While a new page or search loads,
//! the previous envelope stays readable instead of blanking the view.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use citaflow_client::ApiClient;
use citaflow_client::endpoints::ListQuery;
use citaflow_client::endpoints::appointments::AppointmentQuery;
use citaflow_core::errors::BookingResult;
use citaflow_core::models::appointment::{Appointment, AppointmentFilter};
use citaflow_core::models::client::Client;
use citaflow_core::models::employee::Employee;
use citaflow_core::models::pagination::Paginated;
use citaflow_core::models::service::Service;
use mockall::automock;

use crate::cache::{QueryCache, QueryKey};
use crate::debounce::Debounced;

/// Data source for one paginated, searchable resource.
#[automock]
#[async_trait]
pub trait ListFetcher<T: Send + Sync + 'static>: Send + Sync {
    async fn fetch(&self, page: u32, limit: u32, search: &str) -> BookingResult<Paginated<T>>;
}

pub struct ListController<T: Send + Sync + 'static> {
    resource: String,
    page: u32,
    limit: u32,
    search: String,
    debounced: Debounced<String>,
    active_search: String,
    stale_time: Duration,
    data: Option<Arc<Paginated<T>>>,
    is_loading: bool,
    error: Option<String>,
    cache: Arc<QueryCache>,
    fetcher: Arc<dyn ListFetcher<T>>,
}

impl<T: Send + Sync + 'static> ListController<T> {
    pub fn new(
        resource: impl Into<String>,
        limit: u32,
        cache: Arc<QueryCache>,
        fetcher: Arc<dyn ListFetcher<T>>,
    ) -> Self {
        Self {
            resource: resource.into(),
            page: 1,
            limit,
            search: String::new(),
            debounced: Debounced::default(),
            active_search: String::new(),
            stale_time: Duration::ZERO,
            data: None,
            is_loading: false,
            error: None,
            cache,
            fetcher,
        }
    }

    /// Lets cached pages be reused for this long before refetching.
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The last envelope received; stays available while a new one loads.
    pub fn data(&self) -> Option<&Paginated<T>> {
        self.data.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records raw search input; the fetch fires from [`tick`] once the
    /// text settles.
    ///
    /// [`tick`]: ListController::tick
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search = text.into();
        self.debounced.set(self.search.clone(), now);
    }

    /// Drives the debounce timer; fetches when the search term settles.
    pub async fn tick(&mut self, now: Instant) -> BookingResult<()> {
        if let Some(settled) = self.debounced.poll(now) {
            if settled != self.active_search {
                self.active_search = settled;
                self.page = 1;
            }
            return self.refresh().await;
        }
        Ok(())
    }

    /// Whether the "next" control is enabled; false on the last known page.
    pub fn can_next_page(&self) -> bool {
        match self.data.as_ref() {
            Some(data) => self.page < data.meta.total_pages,
            None => false,
        }
    }

    pub async fn next_page(&mut self) -> BookingResult<()> {
        if !self.can_next_page() {
            return Ok(());
        }
        self.page += 1;
        self.refresh().await
    }

    pub async fn prev_page(&mut self) -> BookingResult<()> {
        if self.page <= 1 {
            return Ok(());
        }
        self.page -= 1;
        self.refresh().await
    }

    pub async fn set_page(&mut self, page: u32) -> BookingResult<()> {
        let mut target = page.max(1);
        if let Some(data) = self.data.as_ref() {
            target = target.min(data.meta.total_pages.max(1));
        }
        if target == self.page {
            return Ok(());
        }
        self.page = target;
        self.refresh().await
    }

    /// Fetches the current `[resource, page, search, limit]` key through the
    /// cache. On failure the previous data stays visible and only the error
    /// message changes.
    pub async fn refresh(&mut self) -> BookingResult<()> {
        let key = QueryKey::new(self.resource.clone())
            .with(self.page)
            .with(&self.active_search)
            .with(self.limit);

        self.is_loading = true;
        let result = self
            .cache
            .fetch_with(key, self.stale_time, || {
                self.fetcher
                    .fetch(self.page, self.limit, &self.active_search)
            })
            .await;
        self.is_loading = false;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Bookkeeping after a row of this resource was deleted: if the deleted
    /// row was the last one on a non-first page, step back a page, then
    /// invalidate the family and refetch.
    pub async fn after_delete(&mut self) -> BookingResult<()> {
        let emptied_page = self
            .data
            .as_ref()
            .is_some_and(|data| data.data.len() == 1 && self.page > 1);
        if emptied_page {
            self.page -= 1;
        }
        self.cache.invalidate_family(&self.resource);
        self.refresh().await
    }

    /// Invalidates this resource's cache family and refetches the active
    /// page; call it after any create/update mutation succeeds.
    pub async fn after_mutation(&mut self) -> BookingResult<()> {
        self.cache.invalidate_family(&self.resource);
        self.refresh().await
    }
}

#[async_trait]
impl ListFetcher<Employee> for ApiClient {
    async fn fetch(&self, page: u32, limit: u32, search: &str) -> BookingResult<Paginated<Employee>> {
        self.list_employees(&ListQuery::new(page, limit, search)).await
    }
}

#[async_trait]
impl ListFetcher<Service> for ApiClient {
    async fn fetch(&self, page: u32, limit: u32, search: &str) -> BookingResult<Paginated<Service>> {
        self.list_services(&ListQuery::new(page, limit, search)).await
    }
}

#[async_trait]
impl ListFetcher<Client> for ApiClient {
    async fn fetch(&self, page: u32, limit: u32, search: &str) -> BookingResult<Paginated<Client>> {
        self.list_clients(&ListQuery::new(page, limit, search)).await
    }
}

/// The appointments table paginates but has no text search; the search term
/// is ignored rather than sent.
#[async_trait]
impl ListFetcher<Appointment> for ApiClient {
    async fn fetch(&self, page: u32, limit: u32, _search: &str) -> BookingResult<Paginated<Appointment>> {
        let query = AppointmentQuery {
            page,
            limit,
            filter: AppointmentFilter::default(),
        };
        self.list_appointments(&query).await
    }
}
