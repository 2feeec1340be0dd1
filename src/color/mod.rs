//! Color conversion and derived-metrics engine
//!
//! Pure functions over immutable color values:
//!
//! - `conversion` - HEX / RGB / HSL conversions and random generation
//! - `metrics` - WCAG luminance, contrast ratio, light/dark classification
//! - `harmony` - complementary, analogous and triadic colors
//! - `format` - text rendering of colors and metrics
//! - `presets` - the built-in preset palette
//!
//! Nothing here holds state, logs, or touches I/O. The only failure is
//! [`ColorError::InvalidFormat`] from functions that take a raw hex string.
//!
//! ```rust
//! use color_generator::color::{get_color_info, ColorType};
//!
//! let info = get_color_info("#3498DB")?;
//! assert_eq!((info.rgb.r, info.rgb.g, info.rgb.b), (52, 152, 219));
//! assert_eq!(info.color_type, ColorType::Dark);
//! # Ok::<(), color_generator::color::ColorError>(())
//! ```

pub mod conversion;
pub mod error;
pub mod format;
pub mod harmony;
pub mod metrics;
pub mod model;
pub mod presets;

pub use conversion::{
    generate_random_hex, generate_random_hex_with, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl,
};
pub use error::ColorError;
pub use format::DisplayFormat;
pub use harmony::{
    get_analogous_colors, get_complementary_color, get_triadic_colors, DEFAULT_ANALOGOUS_COUNT,
};
pub use metrics::{calculate_contrast_ratio, calculate_luminance, get_color_info, get_color_type};
pub use model::{ColorInfo, ColorType, HexColor, HslColor, RgbColor};
pub use presets::PRESET_COLORS;
