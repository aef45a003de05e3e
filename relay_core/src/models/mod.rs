pub mod response;
pub mod submission;

pub use response::FormResponse;
pub use submission::{Submission, SERVICE_PLACEHOLDER};
