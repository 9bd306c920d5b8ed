pub mod attendance;
pub mod holiday;
pub mod leave_request;
pub mod report;
pub mod role;
pub mod user;
