//! Shared chrome components used across pages.

pub mod nav_bar;
