//! ExactTarget API operations organized by system
//!
//! One module per backend system, one type per action.

pub mod diagnostics;
pub mod job;
pub mod subscriber;

pub use diagnostics::PingOperation;
pub use job::SendSingleOperation;
pub use subscriber::{
    AddSubscriberOperation, DeleteSubscriberOperation, RetrieveSubscriberOperation, Subscriber,
};
