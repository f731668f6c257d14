//! UI layer: app shell, the two form views, and the notification banner.

pub mod app;

pub use app::SmsConsoleApp;
