pub mod cors;
pub mod dispatch;
pub mod errors;
pub mod grpc;
pub mod metrics;
pub mod routes;
pub mod startup;
pub mod state;

pub use grpc::{build_grpc_service, serve_grpc};
pub use routes::build_router;
pub use startup::{build_state, run};
pub use state::AppState;
