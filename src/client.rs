use crate::config::TrackerConfig;
use crate::errors::TrackerError;
use crate::models::{
    Ack, BulkPayload, BulkReceipt, CounterAck, HealthStatus, PageRecord, PageView, Stats,
    ValidValues, VisitorProfile, VisitorRecord,
};
use crate::transport::{ApiTransport, HttpTransport};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct TrackingClient<T = HttpTransport> {
    transport: T,
}

impl TrackingClient<HttpTransport> {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_transport(HttpTransport::new(config))
    }
}

impl<T: ApiTransport> TrackingClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn increment_total_views(&self) -> Result<u64, TrackerError> {
        let ack: CounterAck = self.call(Method::POST, "/vue-totale", None::<&()>).await?;
        if !ack.success {
            return Err(TrackerError::rejected(ack.message));
        }
        let total = ack
            .vues_totales
            .ok_or_else(|| TrackerError::Decode("missing `vues_totales`".into()))?;
        info!("total views incremented, now {total}");
        Ok(total)
    }

    pub async fn record_page_view(&self, page: &PageView) -> Result<(), TrackerError> {
        let ack: Ack = self.call(Method::POST, "/page-vue", Some(page)).await?;
        if !ack.success {
            return Err(TrackerError::rejected(ack.message));
        }
        info!("page view recorded: {} ({})", page.nom_page, page.categorie);
        Ok(())
    }

    pub async fn submit_visitor_profile(&self, profile: &VisitorProfile) -> Result<(), TrackerError> {
        let ack: Ack = self.call(Method::POST, "/visiteur", Some(profile)).await?;
        if !ack.success {
            warn!(
                "visitor profile refused by server: {}",
                ack.message.as_deref().unwrap_or("no message")
            );
            return Err(TrackerError::rejected(ack.message));
        }
        info!("visitor profile recorded");
        Ok(())
    }

    pub async fn submit_bulk(&self, payload: &BulkPayload) -> Result<BulkReceipt, TrackerError> {
        let receipt: BulkReceipt = self.call(Method::POST, "/tracking/bulk", Some(payload)).await?;
        if !receipt.success {
            return Err(TrackerError::rejected(receipt.message));
        }
        info!(
            "bulk accepted: {} visitors, {} pages",
            receipt.visiteurs_ajoutes, receipt.pages_ajoutees
        );
        Ok(receipt)
    }

    pub async fn fetch_stats(&self) -> Result<Stats, TrackerError> {
        let stats: Stats = self.call(Method::GET, "/stats", None::<&()>).await?;
        debug!(
            "stats: {} total views, {} visitors",
            stats.vues_totales, stats.nombre_visiteurs
        );
        Ok(stats)
    }

    pub async fn health(&self) -> Result<HealthStatus, TrackerError> {
        self.call(Method::GET, "/health", None::<&()>).await
    }

    // `true` only when the API reports `"healthy"`; any error counts as
    // unavailable.
    pub async fn check_health(&self) -> bool {
        match self.health().await {
            Ok(health) if health.is_healthy() => {
                info!("tracking api is up");
                true
            }
            Ok(health) => {
                warn!("tracking api reports status {:?}", health.status);
                false
            }
            Err(err) => {
                warn!("tracking api unavailable: {err}");
                false
            }
        }
    }

    pub async fn list_visitors(&self, limit: u32) -> Result<Vec<VisitorRecord>, TrackerError> {
        self.call(Method::GET, &format!("/visiteurs?limit={limit}"), None::<&()>)
            .await
    }

    pub async fn list_pages(&self) -> Result<Vec<PageRecord>, TrackerError> {
        self.call(Method::GET, "/pages", None::<&()>).await
    }

    pub async fn valid_values(&self) -> Result<ValidValues, TrackerError> {
        self.call(Method::GET, "/valeurs-valides", None::<&()>).await
    }

    async fn call<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, TrackerError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.transport.send(method, path, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}
