//! UI module - contains UI rendering components
//!
//! Widgets and chart painters shared by the app views.

pub mod charts;
pub mod components;
