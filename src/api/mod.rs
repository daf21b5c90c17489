//! HTTP API module for the payroll calculation engine.
//!
//! This module provides the REST endpoint for computing a salary
//! breakdown from inline inputs. Persistence flows (generation,
//! recalculation) are library-level concerns of the surrounding
//! application, not HTTP routes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
