use std::{convert::Infallible, fmt, str::FromStr};

use crate::category::WeatherCategory;

/// Dashboard filter, as encoded in a filter button's `data-filter` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(WeatherCategory),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            Filter::All
        } else {
            Filter::Category(WeatherCategory::from_api(value))
        }
    }

    /// The `Rain` filter also admits `Drizzle`.
    pub fn matches(&self, category: &WeatherCategory) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(WeatherCategory::Rain) => {
                matches!(category, WeatherCategory::Rain | WeatherCategory::Drizzle)
            }
            Filter::Category(wanted) => wanted == category,
        }
    }

    pub fn as_data_attr(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category.as_str(),
        }
    }

    /// Filters offered by the dashboard's button row.
    pub fn buttons() -> Vec<Filter> {
        vec![
            Filter::All,
            Filter::Category(WeatherCategory::Clear),
            Filter::Category(WeatherCategory::Clouds),
            Filter::Category(WeatherCategory::Rain),
            Filter::Category(WeatherCategory::Snow),
            Filter::Category(WeatherCategory::Thunderstorm),
        ]
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_data_attr())
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::parse(s))
    }
}
