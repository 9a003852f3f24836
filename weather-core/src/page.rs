//! Dashboard page state and event handling.
//!
//! [`Page`] plays the role of the page controller: it owns the cached
//! client, the list of dashboard cities, the rendered cards, the active
//! filter and the search box contents, and reacts to [`PageEvent`]s.
//! Cities are always fetched one at a time, in list order.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    WeatherError, WeatherProvider,
    cache::CachedClient,
    card::Card,
    filter::Filter,
    model::CityRequest,
};

/// Ordered cards currently on screen.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    cards: Vec<Card>,
}

impl Dashboard {
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards wrapped in the page's `.dashboard` container.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"dashboard\">\n");
        for card in &self.cards {
            html.push_str(&card.to_html());
        }
        html.push_str("</div>\n");
        html
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Load,
    Search(String),
    Refresh,
    Filter(Filter),
}

#[derive(Debug)]
pub struct Page<P> {
    client: CachedClient<P>,
    cities: Vec<CityRequest>,
    dashboard: Dashboard,
    active_filter: Option<Filter>,
    search_input: String,
}

impl<P: WeatherProvider> Page<P> {
    pub fn new(client: CachedClient<P>, cities: Vec<CityRequest>) -> Self {
        Self {
            client,
            cities,
            dashboard: Dashboard::default(),
            active_filter: None,
            search_input: String::new(),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn active_filter(&self) -> Option<&Filter> {
        self.active_filter.as_ref()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn cities(&self) -> &[CityRequest] {
        &self.cities
    }

    pub fn client(&self) -> &CachedClient<P> {
        &self.client
    }

    /// Dispatch a page event. Only a search can fail.
    pub async fn handle(&mut self, event: PageEvent) -> Result<(), WeatherError> {
        match event {
            PageEvent::Load => self.load().await,
            PageEvent::Search(input) => return self.search(&input).await,
            PageEvent::Refresh => self.refresh().await,
            PageEvent::Filter(filter) => self.select_filter(filter).await,
        }
        Ok(())
    }

    pub async fn load(&mut self) {
        self.active_filter = Some(Filter::All);
        self.render_defaults().await;
    }

    /// Replace the dashboard with the single searched city.
    ///
    /// Blank input is ignored. On failure the dashboard is left empty and
    /// the error is returned for the caller to show as an alert.
    pub async fn search(&mut self, input: &str) -> Result<(), WeatherError> {
        let city = input.trim();
        if city.is_empty() {
            return Ok(());
        }

        self.active_filter = None;
        self.search_input = city.to_string();
        self.dashboard.clear();

        let data = self.client.fetch(city).await?;
        self.dashboard.push(Card::from_response(&data));
        Ok(())
    }

    /// Reload the default cities and reset the filter to "all".
    pub async fn refresh(&mut self) {
        self.active_filter = Some(Filter::All);
        self.render_defaults().await;
    }

    pub async fn select_filter(&mut self, filter: Filter) {
        self.search_input.clear();
        self.active_filter = Some(filter.clone());

        if filter == Filter::All {
            self.render_defaults().await;
            return;
        }

        self.dashboard.clear();
        let cities = self.cities.clone();
        for city in &cities {
            match self.client.fetch(&city.name).await {
                Ok(data) if filter.matches(&data.category) => {
                    self.dashboard.push(Card::from_response(&data));
                }
                Ok(data) => {
                    debug!(city = %city.name, category = %data.category, %filter, "filtered out");
                }
                Err(err) => warn!(city = %city.name, "{err}"),
            }
        }
    }

    /// Render `cities` in order, skipping any that fail to load.
    pub async fn render_cities(&mut self, cities: &[CityRequest]) {
        self.dashboard.clear();
        for city in cities {
            match self.client.fetch(&city.name).await {
                Ok(data) => self.dashboard.push(Card::from_response(&data)),
                Err(err) => warn!(city = %city.name, "{err}"),
            }
        }
    }

    async fn render_defaults(&mut self) {
        let cities = self.cities.clone();
        self.render_cities(&cities).await;
    }
}
