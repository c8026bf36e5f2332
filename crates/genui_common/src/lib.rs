//! Generative UI Common - Engines and routing for the Generative UI demo
//!
//! Pure state machines only: no terminal, no system clock reads outside
//! `apps::clock::SystemWallClock`. Hosts drive time through `advance`.

pub mod apps;
pub mod comparison;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod prompts;
pub mod scheduler;
pub mod theme;

pub use apps::{MountContext, MountedApp};
pub use comparison::{Comparison, ComparisonPhase};
pub use config::GenUiConfig;
pub use dispatcher::{resolve_component, ComponentKind};
pub use error::{GenUiError, Result};
pub use theme::{Palette, Rgb, ThemeMode};
