use crate::classifier::classify_page;
use crate::client::TrackingClient;
use crate::form::{FormFields, FormOutcome, VisitorForm};
use crate::models::{PageView, Stats};
use crate::transport::{ApiTransport, HttpTransport};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub path: String,
    pub title: Option<String>,
    pub has_visitor_form: bool,
}

impl PageContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_visitor_form(mut self) -> Self {
        self.has_visitor_form = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageLoadReport {
    Disabled,
    Tracked {
        total_views: Option<u64>,
        page: PageView,
        page_recorded: bool,
        stats: Option<Stats>,
        form_wired: bool,
    },
}

impl PageLoadReport {
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracked { .. })
    }
}

pub struct Tracker<T = HttpTransport> {
    client: TrackingClient<T>,
    form: Option<VisitorForm>,
}

impl<T: ApiTransport> Tracker<T> {
    pub fn new(client: TrackingClient<T>) -> Self {
        Self { client, form: None }
    }

    pub fn client(&self) -> &TrackingClient<T> {
        &self.client
    }

    pub fn form(&self) -> Option<&VisitorForm> {
        self.form.as_ref()
    }

    pub async fn on_page_load(&mut self, page: &PageContext) -> PageLoadReport {
        if !self.client.check_health().await {
            warn!("offline mode, tracking disabled for this page");
            self.form = None;
            return PageLoadReport::Disabled;
        }

        let total_views = match self.client.increment_total_views().await {
            Ok(total) => Some(total),
            Err(err) => {
                warn!("could not increment total views: {err}");
                None
            }
        };

        let view = classify_page(&page.path, page.title.as_deref());
        let page_recorded = match self.client.record_page_view(&view).await {
            Ok(()) => true,
            Err(err) => {
                warn!("could not record page view for {}: {err}", page.path);
                false
            }
        };

        let stats = match self.client.fetch_stats().await {
            Ok(stats) => Some(stats),
            Err(err) => {
                warn!("could not fetch stats: {err}");
                None
            }
        };

        self.form = page.has_visitor_form.then(VisitorForm::new);

        info!("tracking initialised for {}", page.path);
        PageLoadReport::Tracked {
            total_views,
            page: view,
            page_recorded,
            stats,
            form_wired: self.form.is_some(),
        }
    }

    pub async fn on_form_submit(&mut self, fields: &FormFields) -> FormOutcome {
        match self.form.as_mut() {
            Some(form) => form.submit(&self.client, fields).await,
            None => FormOutcome::NotWired,
        }
    }
}
