//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Departure;

/// The departure board page.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub address: String,
    pub rows: Vec<DepartureRow>,

    /// User-visible message shown instead of rows.
    pub message: Option<String>,

    /// Local time the board was built, "HH:MM".
    pub updated: String,
}

/// One board row.
#[derive(Debug, Clone)]
pub struct DepartureRow {
    pub route: String,
    pub minutes: String,
    pub stop_name: String,
    pub badge_color: String,
    pub badge_text_color: String,
}

impl From<&Departure> for DepartureRow {
    fn from(d: &Departure) -> Self {
        Self {
            route: d.route_label(),
            minutes: d.minutes_label(),
            stop_name: d.stop_name.clone(),
            badge_color: d.badge_color.clone(),
            badge_text_color: d.badge_text_color.clone(),
        }
    }
}
