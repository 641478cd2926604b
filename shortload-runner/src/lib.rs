//! goose integration for the shortload scenario
//!
//! goose owns user spawning, hatch rate, run time, metrics and reports.
//! This crate only registers one scenario whose single transaction asks the
//! task registry for the next request and hands it to the goose user.

pub mod attack;
pub mod errors;
pub mod request;
pub mod session;

pub use attack::{run, shortener_scenario, ITERATION_TRANSACTION, SCENARIO_NAME};
pub use errors::RunnerError;
pub use request::{goose_method, send_spec};
pub use session::UserSession;
