use crate::client::TrackingClient;
use crate::errors::TrackerError;
use crate::models::VisitorProfile;
use crate::transport::ApiTransport;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

pub const FAILURE_ALERT: &str = "Erreur lors de l'envoi. Veuillez réessayer.";

pub type FormFields = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormView {
    #[default]
    Visible,
    Thanked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Thanked,
    Alert(String),
    NotWired,
}

pub fn extract_profile(fields: &FormFields) -> Result<VisitorProfile, TrackerError> {
    Ok(VisitorProfile {
        type_visiteur: field(fields, "type_visiteur")?,
        temps_sejour: field(fields, "temps_sejour")?,
        tranche_age: field(fields, "tranche_age")?,
        type_personna: field(fields, "type_personna")?,
    })
}

fn field<T: FromStr>(fields: &FormFields, name: &'static str) -> Result<T, TrackerError> {
    fields
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .ok_or(TrackerError::InvalidField { field: name })
}

#[derive(Debug, Default)]
pub struct VisitorForm {
    view: FormView,
}

impl VisitorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormView {
        self.view
    }

    pub async fn submit<T: ApiTransport>(
        &mut self,
        client: &TrackingClient<T>,
        fields: &FormFields,
    ) -> FormOutcome {
        let result = match extract_profile(fields) {
            Ok(profile) => client.submit_visitor_profile(&profile).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.view = FormView::Thanked;
                FormOutcome::Thanked
            }
            Err(err) => {
                warn!("visitor form not sent: {err}");
                FormOutcome::Alert(FAILURE_ALERT.to_string())
            }
        }
    }
}
