//! Subscriber system operations
//!
//! Adding, deleting and looking up list subscribers.

mod add;
mod delete;
mod retrieve;

pub use add::{AddSubscriberOperation, AddSubscriberRequest, SUBSCRIBER_ADDED};
pub use delete::{DeleteSubscriberOperation, DeleteSubscriberRequest, SUBSCRIBER_DELETED};
pub use retrieve::{
    RetrieveSubscriberOperation, RetrieveSubscriberRequest, Subscriber, ALL_SUBSCRIBERS_LIST,
};
