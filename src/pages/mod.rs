//! Top-level route views.

pub mod auth;
pub mod ecommerce;
pub mod payment;
pub mod subscription;
