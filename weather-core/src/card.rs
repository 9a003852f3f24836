//! Card rendering for a single city.
//!
//! A [`Card`] holds the display-ready values for one [`WeatherResponse`]. It
//! renders as an HTML fragment matching the dashboard page's markup (CSS
//! custom properties for the colours, `data-weather-main` for filtering) and
//! as plain terminal text through [`Display`](fmt::Display).

use std::fmt;

use crate::{
    WeatherResponse,
    category::{Palette, WeatherCategory},
    model::Units,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub icon: &'static str,
    pub city: String,
    pub country: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub temperature_suffix: &'static str,
    pub description: String,
    pub humidity_pct: u8,
    pub wind: i64,
    pub wind_unit: &'static str,
    pub pressure_hpa: u32,
    /// Whole kilometres, `None` when the API reported none (or zero).
    pub visibility_km: Option<i64>,
    pub category: WeatherCategory,
    pub palette: Palette,
}

impl Card {
    pub fn from_response(data: &WeatherResponse) -> Self {
        let (wind, wind_unit) = match data.units {
            Units::Imperial => (round_half_up(data.wind_speed), "mph"),
            Units::Metric | Units::Standard => (round_half_up(data.wind_speed * 3.6), "km/h"),
        };

        Self {
            icon: data.category.icon(),
            city: data.city.clone(),
            country: data.country.clone(),
            temperature: round_half_up(data.temperature),
            feels_like: round_half_up(data.feels_like),
            temperature_suffix: data.units.temperature_suffix(),
            description: capitalize(&data.description),
            humidity_pct: data.humidity_pct,
            wind,
            wind_unit,
            pressure_hpa: data.pressure_hpa,
            visibility_km: data
                .visibility_m
                .filter(|m| *m > 0)
                .map(|m| round_half_up(f64::from(m) / 1000.0)),
            category: data.category.clone(),
            palette: data.category.palette(),
        }
    }

    fn visibility_label(&self) -> String {
        self.visibility_km.map_or_else(|| "-".to_string(), |km| km.to_string())
    }

    /// Inline style carrying the category colours.
    pub fn style(&self) -> String {
        format!(
            "--hover-color: {}; --shine-color: {}; --border-color: {};",
            self.palette.hover, self.palette.shine, self.palette.border
        )
    }

    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<div class=\"card\" data-weather-main=\"{main}\" style=\"{style}\">\n",
                "  <div class=\"icon\">{icon}</div>\n",
                "  <h2>{city} <small>{country}</small></h2>\n",
                "  <div class=\"temp\">{temp}{suffix}</div>\n",
                "  <div class=\"feels-like\">Feels like: {feels}{suffix}</div>\n",
                "  <p>{desc}</p>\n",
                "  <div class=\"details\">\n",
                "    <div>💧 {humidity}%</div>\n",
                "    <div>🌬 {wind} {wind_unit}</div>\n",
                "    <div>🌡 {pressure} hPa</div>\n",
                "    <div>👁 {visibility} km</div>\n",
                "  </div>\n",
                "</div>\n",
            ),
            main = escape_html(self.category.as_str()),
            style = self.style(),
            icon = self.icon,
            city = escape_html(&self.city),
            country = escape_html(&self.country),
            temp = self.temperature,
            feels = self.feels_like,
            suffix = self.temperature_suffix,
            desc = escape_html(&self.description),
            humidity = self.humidity_pct,
            wind = self.wind,
            wind_unit = self.wind_unit,
            pressure = self.pressure_hpa,
            visibility = self.visibility_label(),
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {} {}", self.icon, self.city, self.country)?;
        writeln!(
            f,
            "    {}{} (feels like {}{})  {}",
            self.temperature,
            self.temperature_suffix,
            self.feels_like,
            self.temperature_suffix,
            self.description
        )?;
        write!(
            f,
            "    💧 {}%  🌬 {} {}  🌡 {} hPa  👁 {} km",
            self.humidity_pct,
            self.wind,
            self.wind_unit,
            self.pressure_hpa,
            self.visibility_label()
        )
    }
}

// Halves round towards positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
