//! UI Components
//!
//! Leptos components for the shop screens.

pub mod error_banner;
pub mod loading;
pub mod map;
pub mod nav;
pub mod shop_card;
pub mod toast;

pub use error_banner::ErrorBanner;
pub use loading::Loading;
pub use map::ShopMap;
pub use nav::{HomeLink, ShopsLink};
pub use shop_card::ShopCard;
pub use toast::Toast;
