//! Scene construction utilities
//!
//! This module assembles a harbor [`World`](shipdock_core::World) from the
//! application configuration.

mod harbor_builder;

pub use harbor_builder::{HarborBuilder, SceneError};
