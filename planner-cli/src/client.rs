//! HTTP client for the remote trip service.

use anyhow::{Context, Result};
use serde::Deserialize;

use planner_core::server::{ServerError, TripServer};
use planner_core::trip::{
    ConfirmParticipationPayload, CreateActivityPayload, CreateLinkPayload, CreateTripPayload,
    DayActivities, Link, Participant, TripData, UpdateTripPayload,
};

use crate::config::Config;

/// Client for the trip service REST API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    owner_name: Option<String>,
    owner_email: Option<String>,
}

// Response envelopes matching the service API

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct TripEnvelope {
    trip: TripData,
}

#[derive(Deserialize)]
struct TripIdResponse {
    #[serde(rename = "tripId")]
    trip_id: String,
}

#[derive(Deserialize)]
struct ActivityIdResponse {
    #[serde(rename = "activityId")]
    activity_id: String,
}

#[derive(Deserialize)]
struct LinkIdResponse {
    #[serde(rename = "linkId")]
    link_id: String,
}

#[derive(Deserialize)]
struct ActivitiesEnvelope {
    activities: Vec<DayActivities>,
}

#[derive(Deserialize)]
struct LinksEnvelope {
    links: Vec<Link>,
}

#[derive(Deserialize)]
struct ParticipantsEnvelope {
    participants: Vec<Participant>,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            owner_name: config.owner_name.clone(),
            owner_email: config.owner_email.clone(),
        }
    }

    /// GET /trips/:id
    pub async fn get_trip(&self, trip_id: &str) -> Result<TripData> {
        let resp = self
            .http
            .get(format!("{}/trips/{}", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let envelope: TripEnvelope = resp.json().await?;
        Ok(envelope.trip)
    }

    /// PUT /trips/:id
    pub async fn update_trip(&self, trip_id: &str, payload: &UpdateTripPayload) -> Result<String> {
        let resp = self
            .http
            .put(format!("{}/trips/{}", self.base_url, trip_id))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: TripIdResponse = resp.json().await?;
        Ok(body.trip_id)
    }

    /// GET /trips/:id/activities
    pub async fn list_activities(&self, trip_id: &str) -> Result<Vec<DayActivities>> {
        let resp = self
            .http
            .get(format!("{}/trips/{}/activities", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let envelope: ActivitiesEnvelope = resp.json().await?;
        Ok(envelope.activities)
    }

    /// POST /trips/:id/activities
    pub async fn create_activity(
        &self,
        trip_id: &str,
        payload: &CreateActivityPayload,
    ) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/trips/{}/activities", self.base_url, trip_id))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: ActivityIdResponse = resp.json().await?;
        Ok(body.activity_id)
    }

    /// GET /trips/:id/links
    pub async fn list_links(&self, trip_id: &str) -> Result<Vec<Link>> {
        let resp = self
            .http
            .get(format!("{}/trips/{}/links", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let envelope: LinksEnvelope = resp.json().await?;
        Ok(envelope.links)
    }

    /// POST /trips/:id/links
    pub async fn create_link(&self, trip_id: &str, payload: &CreateLinkPayload) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/trips/{}/links", self.base_url, trip_id))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let body: LinkIdResponse = resp.json().await?;
        Ok(body.link_id)
    }

    /// GET /trips/:id/participants
    pub async fn list_participants(&self, trip_id: &str) -> Result<Vec<Participant>> {
        let resp = self
            .http
            .get(format!("{}/trips/{}/participants", self.base_url, trip_id))
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        let envelope: ParticipantsEnvelope = resp.json().await?;
        Ok(envelope.participants)
    }

    /// PATCH /participants/:id/confirm
    pub async fn confirm_participation(
        &self,
        participant_id: &str,
        payload: &ConfirmParticipationPayload,
    ) -> Result<()> {
        let resp = self
            .http
            .patch(format!(
                "{}/participants/{}/confirm",
                self.base_url, participant_id
            ))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to the trip service")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.error);
        }

        Ok(())
    }
}

impl TripServer for Client {
    /// POST /trips
    async fn create_trip(&self, payload: &CreateTripPayload) -> Result<String, ServerError> {
        // Attach the configured owner unless the draft already set one
        let mut payload = payload.clone();
        if payload.owner_name.is_none() {
            payload.owner_name = self.owner_name.clone();
        }
        if payload.owner_email.is_none() {
            payload.owner_email = self.owner_email.clone();
        }

        let resp = self
            .http
            .post(format!("{}/trips", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(ServerError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: TripIdResponse = resp
            .json()
            .await
            .map_err(|e| ServerError::InvalidResponse(e.to_string()))?;
        Ok(body.trip_id)
    }
}
