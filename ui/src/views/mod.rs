mod dashboard;
mod home;
mod landing;

pub use dashboard::Dashboard;
pub use home::Home;
pub use landing::LandingPage;
