//! HTTP API module for the Approval Routing and Compensation Engine.
//!
//! This module provides the REST API endpoints for compensation
//! calculation, approver resolution, request transitions, and loan
//! scheduling.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CompensationRequest, LoanScheduleRequest, LoanSkipRequest, ResolveApproverRequest,
    TransitionRequest,
};
pub use response::ApiError;
pub use state::AppState;
