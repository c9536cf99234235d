//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` picks between the public landing page and the signed-in dashboard;
//! everything else opens in the overlay and lives in `components`.

pub mod dashboard;
pub mod home;
pub mod landing;
