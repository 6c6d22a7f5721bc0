// Command handling
//
// This module wires the command-line surface to the library: it loads
// settings, reads theme records from files or stdin, and writes rendered
// configs, previews and generated themes to their destinations.

pub mod config;

pub use config::{load_settings, ConfigError, Settings};

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use crossterm::tty::IsTty;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use tracing::{debug, info};

use crate::cli::{Args, Command};
use crate::color::{hex_to_rgb, rgb_to_hex};
use crate::export::{render, Clock, ConfigFormat, FixedClock};
use crate::theme::{ThemeJson, ThemeRecord};
use crate::ui;

/// Run one command to completion
pub fn run(args: Args) -> Result<()> {
    let settings = load_settings(args.config.as_deref()).context("Failed to load settings")?;
    let stdout = io::stdout();

    match args.command {
        Command::Export {
            theme,
            output,
            format,
            locale,
            generated_at,
        } => {
            let mut settings = settings;
            settings
                .apply_cli_overrides(locale, format)
                .context("Invalid command-line option")?;
            let theme = read_theme(&theme)?;
            let clock = export_clock(&settings, generated_at)?;
            match output {
                Some(path) => export_to_file(&theme, settings.format, clock.as_ref(), &path),
                None => export_to_writer(&theme, settings.format, clock.as_ref(), &mut stdout.lock()),
            }
        }
        Command::Preview { theme } => {
            let theme = read_theme(&theme)?;
            if stdout.is_tty() {
                draw_inline_preview(&theme)
            } else {
                stdout
                    .lock()
                    .write_all(ui::preview_plain_text(&theme).as_bytes())
                    .context("Failed to write preview")
            }
        }
        Command::New { name } => {
            write_theme_json(&ThemeRecord::with_defaults(name), &mut stdout.lock())
        }
        Command::Random { name, seed } => {
            let theme = match seed {
                Some(seed) => ThemeRecord::random(&mut StdRng::seed_from_u64(seed), name),
                None => ThemeRecord::random(&mut rand::thread_rng(), name),
            };
            write_theme_json(&theme, &mut stdout.lock())
        }
        Command::Hex { value } => {
            let line = hex_command(&value)?;
            writeln!(stdout.lock(), "{line}")?;
            Ok(())
        }
        Command::Rgb { r, g, b } => {
            writeln!(stdout.lock(), "{}", rgb_to_hex(r, g, b))?;
            Ok(())
        }
    }
}

/// Read a theme record from a JSON file, or stdin when `source` is "-"
pub fn read_theme(source: &str) -> Result<ThemeRecord> {
    let text = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read theme from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read theme file {source}"))?
    };
    parse_theme(&text).with_context(|| format!("Invalid theme in {source}"))
}

/// Parse and validate a theme JSON document
pub fn parse_theme(text: &str) -> Result<ThemeRecord> {
    let json = ThemeJson::from_json_str(text).context("Malformed theme JSON")?;
    let theme = ThemeRecord::try_from(&json)?;
    debug!(
        theme = theme.display_name(),
        complete = theme.is_complete(),
        "Parsed theme record"
    );
    Ok(theme)
}

/// Header clock: `--generated-at` text if given, else the settings' wall clock
fn export_clock(settings: &Settings, generated_at: Option<String>) -> Result<Box<dyn Clock>> {
    Ok(match generated_at {
        Some(text) => Box::new(FixedClock::new(text)),
        None => Box::new(settings.clock()?),
    })
}

/// Render and write to any writer
pub fn export_to_writer(
    theme: &ThemeRecord,
    format: ConfigFormat,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<()> {
    let doc = render(theme, format, clock)
        .with_context(|| format!("Cannot export theme \"{}\"", theme.display_name()))?;
    out.write_all(doc.as_str().as_bytes())
        .context("Failed to write config")?;
    out.flush().context("Failed to write config")?;
    Ok(())
}

/// Render and write to `path`; nothing is written if rendering fails
pub fn export_to_file(
    theme: &ThemeRecord,
    format: ConfigFormat,
    clock: &dyn Clock,
    path: &Path,
) -> Result<()> {
    let doc = render(theme, format, clock)
        .with_context(|| format!("Cannot export theme \"{}\"", theme.display_name()))?;
    fs::write(path, doc.as_str())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        path = %path.display(),
        suggested = doc.file_name(),
        "Wrote terminal config"
    );
    Ok(())
}

fn write_theme_json(theme: &ThemeRecord, out: &mut dyn Write) -> Result<()> {
    let text = ThemeJson::from(theme)
        .to_json_pretty()
        .context("Failed to serialize theme")?;
    writeln!(out, "{text}").context("Failed to write theme")?;
    Ok(())
}

fn hex_command(value: &str) -> Result<String> {
    match hex_to_rgb(value) {
        Some(color) => Ok(format!("{} {} {}", color.r, color.g, color.b)),
        None => bail!("{value:?} is not a #rrggbb color"),
    }
}

fn draw_inline_preview(theme: &ThemeRecord) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(ui::PREVIEW_HEIGHT),
        },
    )
    .context("Failed to open terminal")?;
    terminal
        .draw(|f| ui::render_preview(f, theme))
        .context("Failed to draw preview")?;
    println!();
    Ok(())
}
