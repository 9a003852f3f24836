//! Interactive dashboard session.
//!
//! Mirrors the page's controls: a search box, a refresh button and a row of
//! filter buttons. The page and its cache live for the whole session.

use std::fmt;

use inquire::{InquireError, Select, Text};
use weather_dash_core::{Filter, PageEvent};

use crate::cli::{DashboardPage, print_dashboard};

#[derive(Debug, Clone, PartialEq)]
enum MenuItem {
    Search,
    Refresh,
    Filter(Filter),
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Search => f.write_str("Search city"),
            MenuItem::Refresh => f.write_str("Refresh"),
            MenuItem::Filter(Filter::All) => f.write_str("All weather"),
            MenuItem::Filter(filter) => write!(f, "Only {filter}"),
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

fn menu() -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Search, MenuItem::Refresh];
    items.extend(Filter::buttons().into_iter().map(MenuItem::Filter));
    items.push(MenuItem::Quit);
    items
}

fn header(page: &DashboardPage) -> String {
    match page.active_filter() {
        Some(filter) => format!("== Filter: {filter} =="),
        None => format!("== Search: {} ==", page.search_input()),
    }
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub async fn run(mut page: DashboardPage) -> anyhow::Result<()> {
    page.handle(PageEvent::Load).await?;
    println!("{}", header(&page));
    print_dashboard(page.dashboard());

    loop {
        let choice = match Select::new("Dashboard:", menu()).prompt() {
            Ok(choice) => choice,
            Err(err) if is_cancel(&err) => break,
            Err(err) => return Err(err.into()),
        };

        let event = match choice {
            MenuItem::Quit => break,
            MenuItem::Refresh => PageEvent::Refresh,
            MenuItem::Filter(filter) => PageEvent::Filter(filter),
            MenuItem::Search => match Text::new("City:").prompt() {
                Ok(city) if city.trim().is_empty() => continue,
                Ok(city) => PageEvent::Search(city),
                Err(err) if is_cancel(&err) => continue,
                Err(err) => return Err(err.into()),
            },
        };

        if let Err(err) = page.handle(event).await {
            eprintln!("⚠️  {err}");
            continue;
        }

        println!("{}", header(&page));
        print_dashboard(page.dashboard());
    }

    Ok(())
}
