//! Reusable UI components.

pub mod header;
pub mod loading_screen;
pub mod protected_route;
