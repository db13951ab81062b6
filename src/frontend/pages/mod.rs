//! Page components for the RobotTrader frontend

mod auth;
mod blog;
mod builder;
mod dashboard;
mod landing;
mod learn;
mod not_found;
mod support;

pub use auth::AuthPage;
pub use blog::{BlogArticlePage, BlogPage};
pub use builder::BuilderPage;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use learn::{LearnPage, LessonPage};
pub use not_found::NotFound;
pub use support::SupportPage;
