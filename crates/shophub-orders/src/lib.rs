//! Order placement: the submission payload, the relay client, and the
//! checkout flow that ties them to the persisted cart.

pub mod checkout;
pub mod client;
pub mod error;
pub mod submission;

pub use checkout::{place_order, OrderReceipt};
pub use client::OrderClient;
pub use error::OrderError;
pub use submission::{OrderLine, OrderSubmission};
