//! Core library for the `weather-dash` dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and a per-session response cache
//! - Weather categories with their icon/colour lookup table
//! - Card rendering, category filters and the dashboard page controller
//!
//! It is used by `weather-dash`, but can also be reused by other binaries or services.

pub mod cache;
pub mod card;
pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod provider;

#[cfg(test)]
mod testing;

pub use cache::{CachedClient, WeatherCache};
pub use card::Card;
pub use category::{Palette, WeatherCategory};
pub use config::Config;
pub use error::WeatherError;
pub use filter::Filter;
pub use model::{CityRequest, Units, WeatherResponse, default_cities};
pub use page::{Dashboard, Page, PageEvent};
pub use provider::{WeatherProvider, provider_from_config};
