//! Service layer for contact intake and review.

pub mod intake;

pub use intake::{
    ContactIntakeError, ContactIntakeResult, ContactIntakeService, SubmitContactRequest,
    SubmitReceipt,
};
