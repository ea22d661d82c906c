//! # mindgauge Core
//!
//! Core business logic for the mindgauge clinical-assessment system.
//!
//! This crate contains pure domain operations:
//! - the compiled-in template registry for the supported instruments
//!   (PHQ-9, GAD-7, BDI-II, BAI, PCL-5)
//! - the pure scoring and risk-classification engine
//! - the assessment lifecycle services and the store seam they run over
//!
//! **No API concerns**: authentication, HTTP servers, or wire formats belong
//! in `api-rest` or `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod scoring;
pub mod services;
pub mod store;
pub mod templates;

pub use config::CoreConfig;
pub use error::{AssessmentError, AssessmentResult};
pub use mindgauge_types::{AssessmentStatus, NonEmptyText, RiskLevel};
pub use model::{
    Assessment, Client, ClientDetail, DashboardOverview, DashboardStats, LabeledResponse,
    Responses, Scorecard,
};
pub use services::assessments::AssessmentService;
pub use services::clients::ClientService;
pub use store::{MemoryStore, Store};
pub use templates::{AssessmentTemplate, Question, ResponseOption, TemplateRegistry};
