//! Terminal interface, organized into focused components:
//! - event_loop: entry point, terminal lifecycle and key handling
//! - render: frame drawing

mod event_loop;
mod render;

pub use event_loop::run;
