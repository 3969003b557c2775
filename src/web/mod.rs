//! Web dashboard layer for browser-based UI.
//!
//! Server-rendered HTML pages for managing links, using Askama templates
//! from `templates/`. Forms post back to the server, so the dashboard works
//! without JavaScript.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
