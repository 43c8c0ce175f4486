//! API Routes
//!
//! Route handlers organized by functionality.

pub mod climate;
pub mod health;
pub mod home;
