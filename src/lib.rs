//! Reorderable List Frontend
//!
//! A Leptos CSR demo of a vertically reorderable list:
//! - models / config: the items and how many of them
//! - reorder / store: the list order and how drops change it
//! - style / components / app: the view

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod reorder;
pub mod store;
pub mod style;

pub use app::App;
