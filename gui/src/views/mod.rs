// Routed screens
pub mod dashboard;
pub mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
