//! Plain-text rendering of gallery and detail screens.

use std::fmt::Write as _;

use crate::app::Screen;
use crate::gallery::Card;
use crate::navigator::{DetailView, NavControls};

const RULE: &str = "----------------------------------------";

/// Render one summary card.
#[must_use]
pub fn render_card(card: &Card) -> String {
    format!(
        "[{}] {}\n    {}\n    {}\n    {}\n",
        card.index, card.full_name, card.email, card.locality, card.photo_url
    )
}

/// Render a gallery listing. `total` is the size of the whole directory.
#[must_use]
pub fn render_gallery(query: &str, cards: &[&Card], total: usize) -> String {
    let mut out = String::new();
    let query = query.trim();
    if query.is_empty() {
        let _ = writeln!(out, "{total} people");
    } else {
        let _ = writeln!(out, "Search \"{query}\": {} of {total}", cards.len());
    }
    let _ = writeln!(out, "{RULE}");

    if cards.is_empty() {
        out.push_str("No matching people.\n");
    }
    for card in cards {
        out.push_str(&render_card(card));
    }
    out
}

/// Render the navigation control line. Disabled controls show `[-]`.
#[must_use]
pub fn render_controls(controls: NavControls) -> String {
    let prev = if controls.prev_enabled { "[p]" } else { "[-]" };
    let next = if controls.next_enabled { "[n]" } else { "[-]" };
    format!("{prev} prev  {next} next  [x] close")
}

/// Render the full detail view.
#[must_use]
pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "#{} {}", view.index, view.full_name);
    let _ = writeln!(out, "{}", view.email);
    let _ = writeln!(out, "{}", view.city);
    let _ = writeln!(out, "{}", &RULE[..10]);
    let _ = writeln!(out, "{}", view.phone);
    let _ = writeln!(out, "{}", view.address);
    let _ = writeln!(out, "Birthday: {}", view.birthday);
    let _ = writeln!(out, "Photo: {}", view.photo_url);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", render_controls(view.controls));
    out
}

/// Render whichever screen is current.
#[must_use]
pub fn render_screen(screen: &Screen<'_>, total: usize) -> String {
    match screen {
        Screen::Gallery { query, cards } => render_gallery(query, cards, total),
        Screen::Detail(view) => render_detail(view),
    }
}
