pub mod ai_request;
pub mod ai_route;
