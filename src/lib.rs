pub mod api_router;
pub mod config;
pub mod enrollment;
pub mod face;
pub mod shared;
