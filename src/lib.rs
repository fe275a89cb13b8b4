//! adminview
//!
//! Terminal admin console for a social-media reseller: browse service orders and
//! user accounts with search, status filters, column sorting and pagination.
//!
//! Layout follows a Pure Core / Impure Shell split:
//! - `model` and `view_state` are pure: records, field access and the
//!   filter → search → sort → paginate pipeline
//! - `state` holds the interactive table state and maps key actions onto it
//! - `source`, `config`, `logging` and `view` touch files, the environment and the terminal

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
