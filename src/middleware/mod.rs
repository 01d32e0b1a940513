pub mod auth;
pub mod blanks;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use blanks::remove_blank_fields;
pub use response::{ApiResponse, ApiResult};
