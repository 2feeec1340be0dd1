//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands.

use crate::cli::output::{
    label, palette_line, print_color_info, print_header, print_info, print_palette,
    print_success, print_warning,
};
use crate::cli::{Args, Commands};
use crate::color::format::format_contrast;
use crate::color::{
    calculate_contrast_ratio, generate_random_hex, get_analogous_colors, get_color_info,
    get_complementary_color, get_triadic_colors, hsl_to_rgb, DisplayFormat, HexColor,
    RgbColor, PRESET_COLORS,
};
use crate::core::auto::{AutoConfig, AutoEvent, AutoGenerator};
use crate::core::config::{
    ensure_config_dir, get_config_path, init_config, open_config_in_editor, Config, ConfigError,
};
use crate::core::export::{export_palette, ExportFormat};
use crate::core::state::{GeneratorState, StateStore, MIN_AUTO_INTERVAL_MS};
use anyhow::{anyhow, bail, Context, Result};
use dialoguer::Confirm;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How often the auto mode loop checks for Ctrl+C
const SHUTDOWN_POLL: Duration = Duration::from_millis(200);

/// Run the command specified in the arguments
pub fn run_command(args: &Args, config: &Config, shutdown_flag: Arc<AtomicBool>) -> Result<()> {
    match &args.command {
        Some(Commands::Config { path, reset }) => {
            handle_config_command(*path, *reset)?;
        }
        Some(Commands::GenerateConfig { output }) => {
            generate_config_file(output.clone())?;
        }
        Some(Commands::ShowConfig) => {
            show_config(config);
        }
        Some(Commands::Convert { value }) => {
            convert_color(value)?;
        }
        Some(Commands::Contrast { first, second }) => {
            show_contrast(first, second)?;
        }
        Some(Commands::Presets) => {
            print_palette("Preset colors", &PRESET_COLORS, DisplayFormat::Hex);
        }
        command => {
            let mut store = StateStore::new(&config.state);
            store.load_or_default();

            run_state_command(command.as_ref(), &mut store, config, shutdown_flag)?;

            store
                .save()
                .with_context(|| format!("Failed to save state to {}", store.path().display()))?;
        }
    }

    Ok(())
}

/// Commands that read or change the generator state
fn run_state_command(
    command: Option<&Commands>,
    store: &mut StateStore,
    config: &Config,
    shutdown_flag: Arc<AtomicBool>,
) -> Result<()> {
    match command {
        None => generate_colors(store, config, 1, false, false),
        Some(Commands::Generate {
            count,
            no_save,
            copy,
        }) => generate_colors(store, config, *count, *no_save, *copy),
        Some(Commands::Info { color, json, copy }) => {
            show_color_info(store, color.as_deref(), *json, *copy)
        }
        Some(Commands::Harmony { color, kind, count }) => {
            let count = count.unwrap_or(config.generator.analogous_count);
            show_harmony(store, color.as_deref(), kind, count)
        }
        Some(Commands::Auto { interval, count }) => {
            run_auto_mode(store, config, *interval, *count, shutdown_flag)
        }
        Some(Commands::Recent { clear }) => {
            if *clear {
                store.update(|state| state.clear_recent());
                print_success("Recent colors cleared");
            } else {
                let state = store.state();
                print_palette("Recent colors", &state.recent_colors, state.display_format);
            }
            Ok(())
        }
        Some(Commands::Favorite { color }) => toggle_favorite(store, color.as_deref()),
        Some(Commands::Favorites) => {
            let state = store.state();
            print_palette("Favorite colors", &state.favorites, state.display_format);
            Ok(())
        }
        Some(Commands::History { clear, yes }) => handle_history_command(store, *clear, *yes),
        Some(Commands::Format { format }) => {
            let format: DisplayFormat = format.parse().map_err(|e: String| anyhow!(e))?;
            store.update(|state| state.set_display_format(format));
            print_success(&format!("Display format set to {}", format));
            Ok(())
        }
        Some(Commands::Export {
            source,
            format,
            output,
        }) => export_colors(store, config, source, format.as_deref(), output.clone()),
        Some(other) => bail!("{:?} does not use the generator state", other),
    }
}

/// The color named on the command line, or the current color
fn resolve_color(store: &StateStore, color: Option<&str>) -> Result<HexColor> {
    match color {
        Some(value) => Ok(HexColor::parse(value.trim())?),
        None => Ok(store.state().current_color),
    }
}

/// Parse a color given as hex, `rgb(r, g, b)`, `r,g,b` or `hsl(h, s%, l%)`
pub fn parse_color_value(value: &str) -> Result<HexColor> {
    let trimmed = value.trim();
    let lower = trimmed.to_lowercase();

    if let Some(inner) = function_args(&lower, "hsl") {
        let [h, s, l] = parse_components(inner, value)?;
        if h > 360 {
            bail!("Hue must be between 0 and 360 in '{}'", value);
        }
        if s > 100 || l > 100 {
            bail!("Saturation and lightness must be percentages in '{}'", value);
        }
        // All three were range checked above
        return Ok(hsl_to_rgb(h as u16, s as u8, l as u8).to_hex());
    }

    let rgb_args = function_args(&lower, "rgb")
        .or_else(|| lower.contains(',').then_some(lower.as_str()));
    if let Some(inner) = rgb_args {
        let [r, g, b] = parse_components(inner, value)?;
        let channel = |c: u32| {
            u8::try_from(c)
                .map_err(|_| anyhow!("RGB channels must be between 0 and 255 in '{}'", value))
        };
        return Ok(RgbColor::new(channel(r)?, channel(g)?, channel(b)?).to_hex());
    }

    Ok(HexColor::parse(trimmed)?)
}

/// The text between `name(` and `)`, if `value` has that shape
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Exactly three comma separated non-negative integers, `%` allowed
fn parse_components(inner: &str, original: &str) -> Result<[u32; 3]> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("Expected three components in '{}'", original);
    }

    let mut values = [0u32; 3];
    for (slot, part) in values.iter_mut().zip(parts.iter().copied()) {
        let digits = part.strip_suffix('%').unwrap_or(part).trim();
        *slot = digits
            .parse()
            .with_context(|| format!("Invalid component '{}' in '{}'", part, original))?;
    }
    Ok(values)
}

/// Generate `count` random colors and show them
pub fn generate_colors(
    store: &mut StateStore,
    config: &Config,
    count: usize,
    no_save: bool,
    copy: bool,
) -> Result<()> {
    if count == 0 {
        print_warning("Nothing to generate (count is 0)");
        return Ok(());
    }

    let format = store.state().display_format;
    let mut last = None;

    for _ in 0..count {
        let color = generate_random_hex();
        debug!("Generated {}", color);

        if !no_save {
            store.update(|state| state.update_current_color(color, config.generator.recent_limit));
        }
        print_color_info(&color.info(), format, store.state().is_favorite(color));
        last = Some(color);
    }

    if copy {
        if let Some(color) = last {
            copy_to_clipboard(&format.render(&color.info()))?;
        }
    }

    if !no_save {
        info!(
            "{} colors generated so far",
            store.state().generated_count
        );
    }
    Ok(())
}

/// Show everything derived from a color
pub fn show_color_info(store: &StateStore, color: Option<&str>, json: bool, copy: bool) -> Result<()> {
    let color = resolve_color(store, color)?;
    let info = get_color_info(&color.to_string())?;
    let format = store.state().display_format;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_color_info(&info, format, store.state().is_favorite(color));
    }

    if copy {
        copy_to_clipboard(&format.render(&info))?;
    }
    Ok(())
}

/// Convert a color value in any supported notation to all representations
pub fn convert_color(value: &str) -> Result<()> {
    let color = parse_color_value(value)?;
    print_color_info(&color.info(), DisplayFormat::Hex, false);
    Ok(())
}

/// Show the WCAG contrast ratio between two colors
pub fn show_contrast(first: &str, second: &str) -> Result<()> {
    let a = HexColor::parse(first.trim())?;
    let b = HexColor::parse(second.trim())?;
    let ratio = calculate_contrast_ratio(a.rgb(), b.rgb());

    println!();
    println!("  {}  {}", label(a, &a.to_string()), label(b, &b.to_string()));
    println!();
    println!("  Contrast ratio: {}:1", format_contrast(ratio));
    for (name, threshold) in [
        ("AA normal text", 4.5),
        ("AA large text", 3.0),
        ("AAA normal text", 7.0),
        ("AAA large text", 4.5),
    ] {
        let verdict = if ratio >= threshold { "pass" } else { "fail" };
        println!("  {:<16} {}", name, verdict);
    }
    Ok(())
}

/// Show complementary, analogous and/or triadic colors
pub fn show_harmony(store: &StateStore, color: Option<&str>, kind: &str, count: usize) -> Result<()> {
    let color = resolve_color(store, color)?;
    let hex = color.to_string();
    let format = store.state().display_format;

    print_header(&format!("Harmonies of {}", hex));

    if matches!(kind, "complementary" | "all") {
        print_palette("Complementary", &[get_complementary_color(&hex)?], format);
    }
    if matches!(kind, "analogous" | "all") {
        print_palette("Analogous", &get_analogous_colors(&hex, count)?, format);
    }
    if matches!(kind, "triadic" | "all") {
        print_palette("Triadic", &get_triadic_colors(&hex)?, format);
    }
    Ok(())
}

/// Generate colors on a timer until Ctrl+C or `count` colors
pub fn run_auto_mode(
    store: &mut StateStore,
    config: &Config,
    interval_secs: Option<u64>,
    count: Option<u64>,
    shutdown_flag: Arc<AtomicBool>,
) -> Result<()> {
    store.update(|state| {
        match interval_secs {
            Some(secs) => state.set_auto_interval_secs(secs),
            None => {
                state.auto_interval_ms = config.auto_mode.interval_ms.max(MIN_AUTO_INTERVAL_MS)
            }
        }
        state.auto_mode = true;
    });
    store.save()?;

    let mut auto_config = AutoConfig::from(&config.auto_mode)
        .with_interval(Duration::from_millis(store.state().auto_interval_ms));
    if let Some(count) = count {
        auto_config = auto_config.with_max_colors(count);
    }

    let mut generator = AutoGenerator::new(auto_config);
    generator.start()?;

    print_info(&format!(
        "Generating a color every {:.1}s. Press Ctrl+C to stop.",
        generator.config().interval.as_secs_f64()
    ));

    let format = store.state().display_format;
    let recent_limit = config.generator.recent_limit;
    let apply = |store: &mut StateStore, color: HexColor, sequence: u64| -> Result<()> {
        store.update(|state| state.update_current_color(color, recent_limit));
        println!("  {}", palette_line(sequence as usize, color, format));
        store.save()?;
        Ok(())
    };

    while !shutdown_flag.load(Ordering::SeqCst) {
        match generator.recv_event_timeout(SHUTDOWN_POLL) {
            Some(AutoEvent::Generated { color, sequence }) => apply(store, color, sequence)?,
            Some(AutoEvent::Finished { generated }) => {
                info!("Auto mode finished after {} colors", generated);
                break;
            }
            None if !generator.is_running() => break,
            None => {}
        }
    }

    generator.stop();
    for event in generator.drain_events() {
        if let AutoEvent::Generated { color, sequence } = event {
            apply(store, color, sequence)?;
        }
    }

    store.update(|state| state.auto_mode = false);
    print_success(&format!(
        "Current color: {}",
        store.state().current_color
    ));
    Ok(())
}

/// Add or remove a color from favorites
pub fn toggle_favorite(store: &mut StateStore, color: Option<&str>) -> Result<()> {
    let color = resolve_color(store, color)?;
    let added = store.update(|state| state.toggle_favorite(color));

    if added {
        print_success(&format!("{} added to favorites", color));
    } else {
        print_success(&format!("{} removed from favorites", color));
    }
    Ok(())
}

/// Show history counters, or clear recent colors and favorites
pub fn handle_history_command(store: &mut StateStore, clear: bool, yes: bool) -> Result<()> {
    if !clear {
        let state = store.state();
        print_info(&format!("Colors generated: {}", state.generated_count));
        print_info(&format!("Current color: {}", state.current_color));
        print_info(&format!("Recent colors: {}", state.recent_colors.len()));
        print_info(&format!("Favorites: {}", state.favorites.len()));
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Clear all recent colors and favorites?")
            .default(false)
            .interact()
            .map_err(|e| anyhow!("Failed to read input: {}", e))?;

        if !confirmed {
            print_info("History left unchanged");
            return Ok(());
        }
    }

    store.update(|state| state.clear_history());
    info!("Cleared recent colors and favorites");
    print_success("History cleared");
    Ok(())
}

/// Export recent colors, favorites or presets as a palette file
pub fn export_colors(
    store: &StateStore,
    config: &Config,
    source: &str,
    format: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let colors = palette_source(store.state(), source);

    let format = match format {
        Some(name) => name.parse::<ExportFormat>()?,
        None => config.export.format,
    };
    let directory = output.unwrap_or_else(|| config.export.directory.clone());

    let path = export_palette(&colors, format, &directory)
        .with_context(|| format!("Failed to export {} colors", source))?;

    print_success(&format!(
        "Exported {} colors to {}",
        colors.len(),
        path.display()
    ));
    Ok(())
}

/// Colors exported for `source`; `recent` leads with the current color
pub fn palette_source(state: &GeneratorState, source: &str) -> Vec<HexColor> {
    match source {
        "favorites" => state.favorites.clone(),
        "presets" => PRESET_COLORS.to_vec(),
        _ => std::iter::once(state.current_color)
            .chain(
                state
                    .recent_colors
                    .iter()
                    .copied()
                    .filter(|c| *c != state.current_color),
            )
            .collect(),
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard is not available")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;
    print_success(&format!("Copied {} to clipboard", text));
    Ok(())
}

/// Handle the `config` command - open, show path, or reset the config file
pub fn handle_config_command(show_path: bool, reset: bool) -> Result<()> {
    if reset {
        let config_path = get_config_path().ok_or(ConfigError::ConfigDirNotFound)?;
        ensure_config_dir()?;
        reset_config_at(&config_path)?;
        return Ok(());
    }

    if show_path {
        let path = Config::get_active_config_path();
        println!("{}", path.display());
        if path.exists() {
            info!("Config file exists at: {}", path.display());
        } else {
            info!("Config file would be created at: {}", path.display());
        }
        return Ok(());
    }

    info!("Opening configuration file in default editor...");
    match open_config_in_editor() {
        Ok(path) => {
            info!("Config file: {}", path.display());
            info!("Save the file after editing to apply changes.");
            info!("Run 'color-gen show-config' to verify your settings.");
        }
        Err(e) => {
            error!("Failed to open config file: {}", e);
            if let Some(path) = get_config_path() {
                info!("You can manually edit the config at: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Overwrite the config file at `path` with the default settings
pub fn reset_config_at(path: &Path) -> Result<()> {
    Config::default().save(path)?;
    info!("Reset config file at: {}", path.display());
    Ok(())
}

/// Generate a configuration file at the specified or default location
pub fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let output_path = match output {
        Some(path) => {
            std::fs::write(&path, Config::generate_default_config())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
        None => init_config()?,
    };

    info!("Configuration file: {}", output_path.display());
    info!("Edit this file to customize the generator settings.");
    info!("");
    info!("Quick tip: Run 'color-gen config' to open the config in your editor.");

    Ok(())
}

/// Show the current configuration settings
pub fn show_config(config: &Config) {
    let config_path = Config::get_active_config_path();
    info!("Configuration file: {}", config_path.display());
    if !config_path.exists() {
        info!("(Using default settings - no config file found)");
    }
    info!("");
    info!("Current Configuration:");
    info!("----------------------");
    info!("[generator]");
    info!("  recent_limit = {}", config.generator.recent_limit);
    info!("  analogous_count = {}", config.generator.analogous_count);
    info!("");
    info!("[auto_mode]");
    info!("  interval_ms = {}", config.auto_mode.interval_ms);
    info!("  max_colors = {}", config.auto_mode.max_colors);
    info!("");
    info!("[state]");
    info!("  enabled = {}", config.state.enabled);
    info!(
        "  state_file = \"{}\"",
        config.state.effective_state_file().display()
    );
    info!("");
    info!("[export]");
    info!("  directory = \"{}\"", config.export.directory.display());
    info!("  format = \"{}\"", config.export.format);
    info!("");
    info!("[logging]");
    info!("  level = \"{}\"", config.logging.level);
    info!("  log_to_file = {}", config.logging.log_to_file);
    info!("  log_file = \"{}\"", config.logging.log_file.display());
}
