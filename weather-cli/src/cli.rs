use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use weather_dash_core::{
    CachedClient, Config, Dashboard, Filter, Page, Units, WeatherProvider, provider_from_config,
};

use crate::interactive;

pub type DashboardPage = Page<Box<dyn WeatherProvider>>;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    /// OpenWeather API key; overrides the configured one.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and unit system.
    Configure,

    /// Show the dashboard for the default cities.
    Show {
        /// Weather category to keep: all, Clear, Clouds, Rain, Snow, Thunderstorm, ...
        #[arg(long, default_value = "all")]
        filter: Filter,

        /// Also write the dashboard as an HTML fragment to this file.
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Show weather for a single city.
    Search {
        /// City name, e.g. "Paris" or "Paris,FR".
        city: String,

        /// Also write the card as an HTML fragment to this file.
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Browse the dashboard interactively with one shared cache.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { filter, html } => {
                let mut page = build_page(self.api_key)?;
                if filter == Filter::All {
                    page.load().await;
                } else {
                    page.select_filter(filter).await;
                }
                print_dashboard(page.dashboard());
                write_html(page.dashboard(), html)?;
            }
            Command::Search { city, html } => {
                let mut page = build_page(self.api_key)?;
                page.search(&city).await?;
                print_dashboard(page.dashboard());
                write_html(page.dashboard(), html)?;
            }
            Command::Interactive => {
                let page = build_page(self.api_key)?;
                interactive::run(page).await?;
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let start = Units::all().iter().position(|u| *u == config.units).unwrap_or(0);
    let units = Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read unit system")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn build_page(api_key: Option<String>) -> anyhow::Result<DashboardPage> {
    let mut config = Config::load()?;
    if let Some(key) = api_key {
        config.set_api_key(key);
    }

    let provider = provider_from_config(&config)?;
    Ok(Page::new(CachedClient::new(provider), config.dashboard_cities()))
}

pub fn print_dashboard(dashboard: &Dashboard) {
    if dashboard.is_empty() {
        println!("No cities to show.");
    } else {
        print!("{dashboard}");
    }
}

fn write_html(dashboard: &Dashboard, path: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    fs::write(&path, dashboard.to_html())
        .with_context(|| format!("Failed to write HTML file: {}", path.display()))?;
    println!("Dashboard written to {}", path.display());
    Ok(())
}
