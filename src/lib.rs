//! Color Generator Library
//!
//! Random color generation, HEX/RGB/HSL conversion, WCAG luminance and
//! contrast, and color harmonies, together with the application layer that
//! remembers recent and favorite colors between runs.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`color`] - Pure color conversion and metrics engine
//! - [`core`] - Configuration, error handling, persisted state, auto mode
//!   and palette export
//! - [`cli`] - Command-line interface (only used by the binary)
//!
//! # Example Usage
//!
//! ```rust
//! use color_generator::color::{get_color_info, get_complementary_color, ColorType};
//!
//! let info = get_color_info("#3498DB")?;
//! assert_eq!(info.hsl.to_string(), "hsl(204, 70%, 53%)");
//! assert_eq!(info.color_type, ColorType::Dark);
//!
//! let complement = get_complementary_color("#3498DB")?;
//! assert_eq!(complement.to_string(), "#CB6724");
//! # Ok::<(), color_generator::color::ColorError>(())
//! ```
//!
//! Persisting what was generated:
//!
//! ```rust,no_run
//! use color_generator::core::config::Config;
//! use color_generator::core::state::StateStore;
//! use color_generator::color::generate_random_hex;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default()?;
//!
//!     let mut store = StateStore::new(&config.state);
//!     store.load_or_default();
//!
//!     let color = generate_random_hex();
//!     store.update(|state| state.update_current_color(color, config.generator.recent_limit));
//!     store.save()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Conversions** - HEX, RGB and HSL in every direction
//! - **Accessibility** - WCAG relative luminance and contrast ratio
//! - **Harmonies** - Complementary, analogous and triadic colors
//! - **History** - Recent colors and favorites kept in a JSON state file
//! - **Auto Mode** - Generate a new color on a timer
//! - **Export** - Save palettes as JSON or CSS custom properties

pub mod cli;
pub mod color;
pub mod core;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
