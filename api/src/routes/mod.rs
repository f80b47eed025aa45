pub mod ai;
pub mod health_route;
