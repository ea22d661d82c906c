//! REST API for the mindgauge assessment system.
//!
//! Exposes the assessment lifecycle (create, list, read, complete), the
//! template registry for question rendering, the client read model, and the
//! clinician dashboard, with OpenAPI/Swagger documentation on every route.
//!
//! Core errors are typed; this crate maps them onto transport statuses
//! (unknown assessment/client → 404, unknown type or malformed responses →
//! 400, double submission → 409) and keeps response bodies generic.

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AssessmentRes, ClientDetailRes, ClientRes, CompleteAssessmentReq, CreateAssessmentReq,
    DashboardRes, ErrorRes, HealthRes, HealthService, LabeledResponseRes, OptionRes, QuestionRes,
    StatsRes, TemplateRes, TemplateSummaryRes,
};
use mindgauge_core::{
    Assessment, AssessmentError, AssessmentService, AssessmentTemplate, Client, ClientDetail,
    ClientService, CoreConfig, DashboardOverview, NonEmptyText, Store, TemplateRegistry,
};

/// Application state for the REST API server.
///
/// Contains the shared services handed to every request handler. All of them
/// are cheap clones over `Arc`s.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<TemplateRegistry>,
    assessments: AssessmentService,
    clients: ClientService,
}

impl AppState {
    /// Wires the services over a store and the compiled-in registry.
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<dyn Store>) -> Self {
        let registry = Arc::new(TemplateRegistry::builtin());
        Self {
            registry: registry.clone(),
            assessments: AssessmentService::new(cfg, registry, store.clone()),
            clients: ClientService::new(store),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_templates,
        get_template,
        create_assessment,
        list_assessments,
        get_assessment,
        complete_assessment,
        list_clients,
        get_client,
        dashboard,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        CreateAssessmentReq,
        CompleteAssessmentReq,
        AssessmentRes,
        LabeledResponseRes,
        ClientRes,
        ClientDetailRes,
        TemplateSummaryRes,
        TemplateRes,
        QuestionRes,
        OptionRes,
        DashboardRes,
        StatsRes,
    ))
)]
pub struct ApiDoc;

/// Builds the full application router, Swagger UI and CORS included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/templates", get(list_templates))
        .route("/templates/:id", get(get_template))
        .route("/assessments", post(create_assessment))
        .route("/assessments", get(list_assessments))
        .route("/assessments/:id", get(get_assessment))
        .route("/assessments/:id/complete", post(complete_assessment))
        .route("/clients", get(list_clients))
        .route("/clients/:id", get(get_client))
        .route("/dashboard", get(dashboard))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorRes>);

/// Maps a core error onto a transport status and a small error body.
fn core_error(context: &str, err: AssessmentError) -> ApiError {
    let status = match &err {
        AssessmentError::NotFound(_) | AssessmentError::ClientNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        AssessmentError::AlreadyCompleted(_) => StatusCode::CONFLICT,
        AssessmentError::TemplateNotFound(_)
        | AssessmentError::InvalidInput(_)
        | AssessmentError::InvalidResponses(_) => StatusCode::BAD_REQUEST,
    };

    if status == StatusCode::NOT_FOUND {
        tracing::debug!("{context}: {err}");
    } else {
        tracing::warn!("{context}: {err}");
    }

    (
        status,
        Json(ErrorRes {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// DOMAIN → DTO CONVERSIONS
// ============================================================================

fn assessment_res(a: &Assessment) -> AssessmentRes {
    let card = a.scorecard.as_ref();
    AssessmentRes {
        id: a.id.clone(),
        assessment_type: a.type_id.clone(),
        name: a.name.clone(),
        client_id: a.client_id.clone(),
        notes: a.notes.clone(),
        created_at: a.created_at.to_rfc3339(),
        status: a.status.to_string(),
        score: card.map(|c| c.score),
        severity: card.map(|c| c.severity.clone()),
        risk_flags: card.map(|c| c.risk_flags.clone()),
        responses: card.map(|c| {
            c.responses
                .iter()
                .map(|r| LabeledResponseRes {
                    question_id: r.question_id,
                    value: r.value,
                    label: r.label.clone(),
                })
                .collect()
        }),
        completed_at: card.map(|c| c.completed_at.to_rfc3339()),
    }
}

fn client_res(c: &Client) -> ClientRes {
    ClientRes {
        id: c.id.clone(),
        name: c.name.clone(),
        email: c.email.clone(),
        risk_level: c.risk_level.to_string(),
        last_contact: c.last_contact.map(|t| t.to_rfc3339()),
    }
}

fn client_detail_res(detail: &ClientDetail) -> ClientDetailRes {
    ClientDetailRes {
        id: detail.client.id.clone(),
        name: detail.client.name.clone(),
        email: detail.client.email.clone(),
        risk_level: detail.client.risk_level.to_string(),
        last_contact: detail.client.last_contact.map(|t| t.to_rfc3339()),
        assessments: detail.assessments.iter().map(assessment_res).collect(),
    }
}

fn template_summary_res(t: &AssessmentTemplate) -> TemplateSummaryRes {
    TemplateSummaryRes {
        id: t.type_id.to_string(),
        name: t.display_name.to_string(),
        full_name: t.full_name.to_string(),
        description: t.description.to_string(),
        category: t.category.to_string(),
        time_estimate: t.time_estimate.to_string(),
        question_count: t.questions.len(),
    }
}

fn template_res(t: &AssessmentTemplate) -> TemplateRes {
    TemplateRes {
        id: t.type_id.to_string(),
        name: t.display_name.to_string(),
        full_name: t.full_name.to_string(),
        description: t.description.to_string(),
        category: t.category.to_string(),
        time_estimate: t.time_estimate.to_string(),
        questions: t
            .questions
            .iter()
            .map(|q| QuestionRes {
                id: q.id,
                text: q.text.to_string(),
                options: q
                    .options
                    .iter()
                    .map(|o| OptionRes {
                        value: o.value,
                        label: o.label.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn dashboard_res(overview: &DashboardOverview) -> DashboardRes {
    DashboardRes {
        stats: StatsRes {
            total_assessments: overview.stats.total_assessments,
            active_clients: overview.stats.active_clients,
            risk_flags: overview.stats.risk_flags,
            completion_rate: overview.stats.completion_rate,
        },
        recent_assessments: overview.recent_assessments.iter().map(assessment_res).collect(),
        flagged_assessments: overview.flagged_assessments.iter().map(assessment_res).collect(),
        high_risk_clients: overview.high_risk_clients.iter().map(client_res).collect(),
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used by monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/templates",
    responses(
        (status = 200, description = "List of registered assessment templates", body = [TemplateSummaryRes])
    )
)]
/// Lists the registered assessment templates without their question banks.
#[axum::debug_handler]
async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummaryRes>> {
    Json(state.registry.iter().map(template_summary_res).collect())
}

#[utoipa::path(
    get,
    path = "/templates/{id}",
    responses(
        (status = 200, description = "Full template with question bank", body = TemplateRes),
        (status = 400, description = "Unknown template id", body = ErrorRes)
    )
)]
/// Returns one template in full, for rendering the questionnaire.
#[axum::debug_handler]
async fn get_template(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<TemplateRes>, ApiError> {
    let template = state
        .registry
        .resolve(&id)
        .map_err(|e| core_error("get template", e))?;
    Ok(Json(template_res(template)))
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = CreateAssessmentReq,
    responses(
        (status = 201, description = "Assessment created in the pending state", body = AssessmentRes),
        (status = 400, description = "Unknown assessment type", body = ErrorRes)
    )
)]
/// Creates a new pending assessment.
///
/// A supplied client id upserts the client record as a side effect; a blank
/// client id is treated as anonymous.
#[axum::debug_handler]
async fn create_assessment(
    State(state): State<AppState>,
    Json(req): Json<CreateAssessmentReq>,
) -> Result<(StatusCode, Json<AssessmentRes>), ApiError> {
    let client_id = req
        .client_id
        .as_deref()
        .and_then(|s| NonEmptyText::new(s).ok());

    let assessment = state
        .assessments
        .create(&req.assessment_type, client_id, req.notes)
        .map_err(|e| core_error("create assessment", e))?;

    Ok((StatusCode::CREATED, Json(assessment_res(&assessment))))
}

#[utoipa::path(
    get,
    path = "/assessments",
    responses(
        (status = 200, description = "All assessments, newest first", body = [AssessmentRes])
    )
)]
/// Lists all assessments, newest creation first.
#[axum::debug_handler]
async fn list_assessments(State(state): State<AppState>) -> Json<Vec<AssessmentRes>> {
    Json(
        state
            .assessments
            .list()
            .iter()
            .map(assessment_res)
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/assessments/{id}",
    responses(
        (status = 200, description = "The assessment", body = AssessmentRes),
        (status = 404, description = "Unknown assessment id", body = ErrorRes)
    )
)]
/// Returns a single assessment by id.
#[axum::debug_handler]
async fn get_assessment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<AssessmentRes>, ApiError> {
    let assessment = state
        .assessments
        .get(&id)
        .map_err(|e| core_error("get assessment", e))?;
    Ok(Json(assessment_res(&assessment)))
}

#[utoipa::path(
    post,
    path = "/assessments/{id}/complete",
    request_body = CompleteAssessmentReq,
    responses(
        (status = 200, description = "Scored assessment", body = AssessmentRes),
        (status = 400, description = "Unknown template or malformed responses", body = ErrorRes),
        (status = 404, description = "Unknown assessment id", body = ErrorRes),
        (status = 409, description = "Assessment was already completed", body = ErrorRes)
    )
)]
/// Submits responses for a pending assessment and returns the scored result.
///
/// Scoring is deterministic, so a repeated submission is rejected rather
/// than retried or re-scored.
#[axum::debug_handler]
async fn complete_assessment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<CompleteAssessmentReq>,
) -> Result<Json<AssessmentRes>, ApiError> {
    let assessment = state
        .assessments
        .complete(&id, &req.responses)
        .map_err(|e| core_error("complete assessment", e))?;
    Ok(Json(assessment_res(&assessment)))
}

#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All clients, most recent contact first", body = [ClientRes])
    )
)]
/// Lists all clients, most recent contact first.
#[axum::debug_handler]
async fn list_clients(State(state): State<AppState>) -> Json<Vec<ClientRes>> {
    Json(state.clients.list().iter().map(client_res).collect())
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    responses(
        (status = 200, description = "Client with their assessment history", body = ClientDetailRes),
        (status = 404, description = "Unknown client id", body = ErrorRes)
    )
)]
/// Returns a single client with their assessments, newest completion first.
#[axum::debug_handler]
async fn get_client(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ClientDetailRes>, ApiError> {
    let detail = state
        .clients
        .get(&id)
        .map_err(|e| core_error("get client", e))?;
    Ok(Json(client_detail_res(&detail)))
}

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard stats and supporting lists", body = DashboardRes)
    )
)]
/// Returns the clinician dashboard payload: headline stats, recently scored
/// assessments, flagged assessments, and high-risk clients.
#[axum::debug_handler]
async fn dashboard(State(state): State<AppState>) -> Json<DashboardRes> {
    Json(dashboard_res(&state.assessments.dashboard()))
}
