//! PostgREST access to the `doctors` table.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use medidesk_domain::{Doctor, DoctorId};

use super::rows::{DoctorInsertRow, DoctorRow};
use super::{SupabaseAuthClient, SupabaseConfig};
use crate::ports::outbound::{ClockPort, NewDoctor, ProfileRepo, RepoError};

const DOCTORS_PATH: &str = "/rest/v1/doctors";

pub struct SupabaseProfileRepo {
    client: Client,
    config: SupabaseConfig,
    clock: Arc<dyn ClockPort>,
    /// Signed-in session used for row-level security; anon key otherwise
    auth: Option<Arc<SupabaseAuthClient>>,
}

impl SupabaseProfileRepo {
    pub fn new(config: SupabaseConfig, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            client: config.http_client(),
            config,
            clock,
            auth: None,
        }
    }

    pub fn with_session(mut self, auth: Arc<SupabaseAuthClient>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// `GET /rest/v1/doctors?select=*&<column>=eq.<value>`
    fn select_url(&self, column: &str, value: &str) -> Result<Url, url::ParseError> {
        let mut url = self.config.endpoint(DOCTORS_PATH)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair(column, &format!("eq.{}", value));
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .auth
            .as_ref()
            .and_then(|auth| auth.current_access_token())
            .unwrap_or_else(|| self.config.anon_key.clone());
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
    }

    async fn select_one(
        &self,
        operation: &'static str,
        column: &str,
        value: &str,
    ) -> Result<Option<Doctor>, RepoError> {
        let url = self
            .select_url(column, value)
            .map_err(|e| RepoError::request(operation, e))?;

        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(|e| RepoError::request(operation, e))?;

        let rows: Vec<DoctorRow> = decode(operation, response).await?;
        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.into_doctor(self.clock.now())))
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, RepoError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| RepoError::request(operation, e))?;
        return Err(RepoError::database(operation, format!("{}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| RepoError::serialization(format!("{}: {}", operation, e)))
}

#[async_trait]
impl ProfileRepo for SupabaseProfileRepo {
    async fn get_doctor_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, RepoError> {
        self.select_one("get_doctor_by_id", "id", id.as_str()).await
    }

    async fn get_doctor_by_email(&self, email: &str) -> Result<Option<Doctor>, RepoError> {
        self.select_one("get_doctor_by_email", "email", email.trim())
            .await
    }

    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, RepoError> {
        const OPERATION: &str = "create_doctor";

        let url = self
            .config
            .endpoint(DOCTORS_PATH)
            .map_err(|e| RepoError::request(OPERATION, e))?;

        let response = self
            .authorized(self.client.post(url))
            .header("Prefer", "return=representation")
            .json(&DoctorInsertRow::from(doctor))
            .send()
            .await
            .map_err(|e| RepoError::request(OPERATION, e))?;

        let rows: Vec<DoctorRow> = decode(OPERATION, response).await?;
        rows.into_iter()
            .next()
            .map(|row| row.into_doctor(self.clock.now()))
            .ok_or_else(|| RepoError::database(OPERATION, "insert returned no row"))
    }
}
