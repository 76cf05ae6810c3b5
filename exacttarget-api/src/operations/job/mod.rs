//! Job system operations
//!
//! Operations that create email send jobs.

mod send_single;

pub use send_single::{SendSingleOperation, SendSingleRequest, JOB_CREATED};
