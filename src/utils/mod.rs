pub mod error;
pub mod format;
pub mod logging;
pub mod response;
pub mod revalidate;
pub mod validation;

pub use error::AppError;
pub use response::{ActionResult, BaseResponse, ErrorResponse};
pub use revalidate::Revalidator;
