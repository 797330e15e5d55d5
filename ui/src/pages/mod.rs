//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod shop_detail;
pub mod shops;

pub use home::Home;
pub use shop_detail::ShopDetail;
pub use shops::Shops;
