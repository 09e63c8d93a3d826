//! Actions console: a Leptos client for browsing, creating and inspecting
//! outbound actions served by the actions API.

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod context;
pub mod controllers;
pub mod error;
pub mod models;
pub mod pages;
pub mod render;
pub mod scheduler;

#[cfg(test)]
mod test_support;
