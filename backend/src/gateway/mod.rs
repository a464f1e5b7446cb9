//! Client for the election platform's voter endpoint.
//!
//! The pipeline treats the platform as an opaque collaborator: one POST with
//! the canonical records, one response with per-record outcome counts. No
//! retry or backoff lives here; a failed submission is surfaced to the
//! operator, who keeps their preview list and can try again.

use common::model::cu_tri::{CuTri, ImportContext};
use common::model::submit::SubmitOutcome;
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("the election backend answered {status}: {body}")]
    Status { status: u16, body: String },
}

pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(base_url: &str, http: reqwest::Client) -> Self {
        GatewayClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Submit a batch of canonical voter records for the given voting
    /// session. Returns the server's outcome counts; any non-success status
    /// is an error carrying the response body for the operator.
    pub async fn submit_batch(
        &self,
        ctx: &ImportContext,
        records: &[CuTri],
    ) -> Result<SubmitOutcome, GatewayError> {
        let url = format!(
            "{}/api/cu-tri/phien/{}/batch",
            self.base_url, ctx.phien_bau_cu_id
        );
        info!(
            "submitting {} voter record(s) to {}",
            records.len(),
            url
        );

        let response = self.http.post(&url).json(records).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }
        Ok(response.json::<SubmitOutcome>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::normalize::normalize;
    use common::model::cu_tri::RawVoterRow;

    fn ctx() -> ImportContext {
        ImportContext {
            phien_bau_cu_id: 42,
            cuoc_bau_cu_id: 9,
        }
    }

    fn records() -> Vec<CuTri> {
        vec![
            normalize(&RawVoterRow::with_email("a@x.com"), &ctx()),
            normalize(&RawVoterRow::with_email("b@x.com"), &ctx()),
        ]
    }

    #[tokio::test]
    async fn decodes_outcome_counts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/cu-tri/phien/42/batch")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"daLuu":2,"daXacThuc":1,"daGuiEmail":1,"trungLap":0}"#)
            .create_async()
            .await;

        let client = GatewayClient::new(&server.url(), reqwest::Client::new());
        let outcome = client.submit_batch(&ctx(), &records()).await.unwrap();
        assert_eq!(outcome.da_luu, 2);
        assert_eq!(outcome.da_xac_thuc, 1);
        assert_eq!(outcome.da_gui_email, 1);
        assert_eq!(outcome.trung_lap, 0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/cu-tri/phien/42/batch")
            .with_status(500)
            .with_body("phien bau cu da ket thuc")
            .create_async()
            .await;

        let client = GatewayClient::new(&server.url(), reqwest::Client::new());
        let err = client.submit_batch(&ctx(), &records()).await.unwrap_err();
        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "phien bau cu da ket thuc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = GatewayClient::new("http://localhost:5000/", reqwest::Client::new());
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
