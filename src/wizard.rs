//! Interactive configuration wizard for creating `book-cover-3d.toml`.
//!
//! The wizard collects the cover image, link behaviour, and geometry
//! through a series of prompts, pre-filling every answer with the stock
//! defaults so accepting each prompt yields a sensible cover. The rotation
//! and animation fine-tuning prompts are gated behind a confirmation since
//! the defaults suit most covers.

use anyhow::{Context, Result};
use book_cover_3d::config::{CoverRequest, Settings, SettingsBuilder};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the config file read and written by the CLI.
pub const CONFIG_FILE: &str = "book-cover-3d.toml";

/// Complete configuration for a book-cover-3d project.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Output HTML file path
    pub outfile: PathBuf,
    /// Title of the generated preview page.
    /// Empty string falls back to the image alt text.
    pub title: String,
    /// The cover to render
    pub cover: CoverRequest,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            outfile: PathBuf::from("book-cover.html"),
            title: String::new(),
            cover: CoverRequest::default(),
        }
    }
}

impl Configuration {
    /// Returns the preview page title, falling back to the image alt text.
    pub fn page_title(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.cover.image_alt.is_empty() {
            &self.cover.image_alt
        } else {
            "Book cover"
        }
    }
}

/// Run the interactive configuration wizard.
///
/// Prompts for the cover image, link, and geometry, then writes
/// `book-cover-3d.toml` to the current directory.
pub fn run() -> Result<()> {
    let theme = ColorfulTheme::default();
    let defaults = Settings::default();

    let image_url: String = Input::with_theme(&theme)
        .with_prompt("Cover image URL")
        .allow_empty(false)
        .interact()
        .with_context(|| "Failed to obtain image URL")?;

    let image_alt: String = Input::with_theme(&theme)
        .with_prompt("Image alt text (can be the book name)")
        .allow_empty(true)
        .interact()
        .with_context(|| "Failed to obtain alt text")?;

    let href: String = Input::with_theme(&theme)
        .with_prompt("Link URL (leave empty for no link)")
        .allow_empty(true)
        .interact()
        .with_context(|| "Failed to obtain link URL")?;

    let width: f64 = Input::with_theme(&theme)
        .with_prompt("Cover width, in pixels")
        .default(defaults.width)
        .interact()
        .with_context(|| "Failed to obtain width")?;

    let height: f64 = Input::with_theme(&theme)
        .with_prompt("Cover height, in pixels")
        .default(defaults.height)
        .interact()
        .with_context(|| "Failed to obtain height")?;

    let thickness: f64 = Input::with_theme(&theme)
        .with_prompt("Book thickness, in pixels")
        .default(defaults.thickness)
        .interact()
        .with_context(|| "Failed to obtain thickness")?;

    let bg_color: String = Input::with_theme(&theme)
        .with_prompt("Cover board colour (any CSS colour)")
        .default(defaults.bg_color.clone())
        .interact()
        .with_context(|| "Failed to obtain colour")?;

    let mut settings = SettingsBuilder::default();
    settings
        .width(width)
        .height(height)
        .thickness(thickness)
        .bg_color(bg_color);

    if Confirm::with_theme(&theme)
        .with_prompt("Do you wish to adjust the rotation and animation settings?")
        .default(false)
        .interact()?
    {
        let rotate: f64 = Input::with_theme(&theme)
            .with_prompt("Resting rotation, in degrees")
            .default(defaults.rotate)
            .interact()?;

        let rotate_hover: f64 = Input::with_theme(&theme)
            .with_prompt("Hover rotation, in degrees")
            .default(defaults.rotate_hover)
            .interact()?;

        let perspective: f64 = Input::with_theme(&theme)
            .with_prompt("Perspective distance, in pixels")
            .default(defaults.perspective)
            .interact()?;

        let transition_duration: f64 = Input::with_theme(&theme)
            .with_prompt("Hover transition duration, in seconds")
            .default(defaults.transition_duration)
            .interact()?;

        let radius: f64 = Input::with_theme(&theme)
            .with_prompt("Right corner radius, in pixels")
            .default(defaults.radius)
            .interact()?;

        let pages_offset: f64 = Input::with_theme(&theme)
            .with_prompt("Page block inset, in pixels")
            .default(defaults.pages_offset)
            .interact()?;

        settings
            .rotate(rotate)
            .rotate_hover(rotate_hover)
            .perspective(perspective)
            .transition_duration(transition_duration)
            .radius(radius)
            .pages_offset(pages_offset);
    }

    let settings = settings
        .build()
        .with_context(|| "Failed to assemble cover settings")?;

    let outfile: String = Input::with_theme(&theme)
        .with_prompt("Output HTML file")
        .default("book-cover.html".to_string())
        .interact()
        .with_context(|| "Failed to obtain output path")?;

    let config = Configuration {
        outfile: PathBuf::from(outfile),
        title: String::new(),
        cover: CoverRequest {
            image_url,
            image_alt,
            href,
            settings,
        },
    };

    let config =
        toml::to_string_pretty(&config).with_context(|| "Failed to convert configuration to TOML")?;

    let config_path = PathBuf::from(CONFIG_FILE);
    if config_path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!("{CONFIG_FILE} already exists, do you want to override it?"))
            .interact()?
    {
        println!("Configuration:");
        println!("{}", config);
    } else {
        std::fs::write(CONFIG_FILE, config)
            .with_context(|| "Failed to write configuration file")?;
        println!("{CONFIG_FILE} written!");
    }

    Ok(())
}
