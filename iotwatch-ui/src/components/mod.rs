//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod gauge;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chart::{ChartGrid, LightPie, SensorChart};
pub use gauge::{Led, RadialGauge, Thermometer};
pub use loading::{ChartSkeleton, Loading};
pub use nav::Nav;
pub use toast::Toast;
