use crate::infra::AppState;
use abm_scoring::error::AppError;
use abm_scoring::scoring::{Contact, LeadReport, MeddicContactScore, ScoreBreakdown};
use abm_scoring::workflows::apollo::ApolloContactImporter;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Serialize)]
pub(crate) struct ScoreContactResponse {
    pub(crate) score: MeddicContactScore,
    pub(crate) breakdown: ScoreBreakdown,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BatchScoreRequest {
    #[serde(default)]
    pub(crate) contacts: Vec<Contact>,
    #[serde(default)]
    pub(crate) apollo_csv: Option<String>,
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchScoreResponse {
    pub(crate) data_source: ContactDataSource,
    #[serde(flatten)]
    pub(crate) report: LeadReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ContactDataSource {
    Apollo,
    Request,
    Mixed,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/contacts/score", post(score_contact_endpoint))
        .route("/api/v1/contacts/score/batch", post(score_batch_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_contact_endpoint(
    State(state): State<AppState>,
    Json(contact): Json<Contact>,
) -> Json<ScoreContactResponse> {
    let score = state.scorer.calculate_contact_score(&contact);
    let breakdown = score.score_breakdown();
    Json(ScoreContactResponse { score, breakdown })
}

pub(crate) async fn score_batch_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let BatchScoreRequest {
        mut contacts,
        apollo_csv,
        top_n,
    } = payload;

    let data_source = match apollo_csv {
        Some(csv) => {
            let imported = ApolloContactImporter::from_reader(Cursor::new(csv.into_bytes()))?;
            let source = if contacts.is_empty() {
                ContactDataSource::Apollo
            } else {
                ContactDataSource::Mixed
            };
            contacts.extend(imported);
            source
        }
        None => ContactDataSource::Request,
    };

    let top_n = top_n.unwrap_or(state.report_top_n);
    let report = LeadReport::build(&state.scorer, &contacts, top_n);

    Ok(Json(BatchScoreResponse {
        data_source,
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_state;
    use abm_scoring::scoring::RoleTier;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn score_contact_endpoint_returns_score_and_breakdown() {
        let contact = Contact::new("Harper Diaz", "SRE Manager").with_scores(80.0, 70.0, 60.0);

        let Json(body) = score_contact_endpoint(State(test_state()), Json(contact)).await;

        assert_eq!(body.score.role_tier, RoleTier::MiddleDecider);
        assert_eq!(body.breakdown.role_fit.tier, "middle_decider");
        assert_eq!(body.breakdown.total_score, body.score.total_score);
    }

    #[tokio::test]
    async fn batch_endpoint_merges_request_and_apollo_contacts() {
        let request = BatchScoreRequest {
            contacts: vec![Contact::new("Avery Chen", "VP of Infrastructure")],
            apollo_csv: Some(
                "Name,Title,ICP Fit Score\nRiley Nguyen,Site Reliability Engineer,90\n".to_string(),
            ),
            top_n: Some(1),
        };

        let Json(body) = score_batch_endpoint(State(test_state()), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, ContactDataSource::Mixed);
        assert_eq!(body.report.contact_count, 2);
        assert_eq!(body.report.top_contacts.len(), 1);
        assert_eq!(body.report.top_contacts[0].name, "Riley Nguyen");
    }

    #[tokio::test]
    async fn batch_route_rejects_malformed_apollo_csv() {
        let app = router(test_state());
        let payload = json!({ "apollo_csv": "Name,Title\nA,B,C\n" });

        let response = app
            .oneshot(
                Request::post("/api/v1/contacts/score/batch")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("Apollo"));
    }

    #[tokio::test]
    async fn batch_route_scores_contacts_with_malformed_scores() {
        let app = router(test_state());
        let payload = json!({
            "contacts": [
                { "name": "Riley Nguyen", "title": "Site Reliability Engineer", "icp_fit_score": "85" },
                { "name": null, "title": "SRE Manager", "icp_fit_score": "n/a", "buying_power_score": {} }
            ]
        });

        let response = app
            .oneshot(
                Request::post("/api/v1/contacts/score/batch")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["data_source"], "request");
        assert_eq!(body["contact_count"], 2);
        assert_eq!(body["top_contacts"][0]["name"], "Riley Nguyen");
        assert_eq!(body["top_contacts"][1]["name"], "");
    }

    #[tokio::test]
    async fn score_route_accepts_sparse_contacts() {
        let app = router(test_state());
        let payload = json!({ "name": "Blank" });

        let response = app
            .oneshot(
                Request::post("/api/v1/contacts/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["score"]["role_tier"], "entry_point");
        assert_eq!(body["score"]["role_classification"], "Unknown");
        assert_eq!(body["breakdown"]["role_fit"]["tier"], "entry_point");
    }

    #[tokio::test]
    async fn readiness_reports_ready_state() {
        let app = router(test_state());

        let response = app
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["status"], "ready");
    }
}
