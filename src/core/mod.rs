//! Core application infrastructure
//!
//! Provides the configuration layer shared by the game and the front-end:
//!
//! - [`GameSettings`] - Clock, search depth, mode and side preferences
//! - [`settings_persistence`] - JSON persistence in the platform config dir
//! - [`CoreError`] - Errors raised while loading or saving settings
//!
//! Nothing here knows about turns or positions; the game layer reads the
//! settings once when a session is created.

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::GameSettings;
pub use settings_persistence::{load_settings, save_settings, settings_path};
