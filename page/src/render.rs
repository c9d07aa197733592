//! Terminal rendering of the page view.

use std::fmt;

use colored::Colorize;
use skip_core::{PageView, SkipCard};

struct Step {
    label: &'static str,
    done: bool,
    current: bool,
}

const STEPS: &[Step] = &[
    Step { label: "Postcode", done: true, current: false },
    Step { label: "Waste Type", done: true, current: false },
    Step { label: "Select Skip", done: false, current: true },
    Step { label: "Permit Check", done: false, current: false },
    Step { label: "Choose Date", done: false, current: false },
    Step { label: "Payment", done: false, current: false },
];

pub const COMMAND_HELP: &str = "Commands: select <n> | deselect | proceed | retry | quit";

/// The whole page for one view.
pub struct Page<'a>(pub &'a PageView);

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", progress_strip())?;
        writeln!(f, "{}", "Choose Your Skip Size".bold())?;
        writeln!(f, "Select the skip size that best suits your needs\n")?;

        match self.0 {
            PageView::Loading => writeln!(f, "Loading skip options..."),
            PageView::Error { message } => {
                writeln!(f, "{}", "Error".red().bold())?;
                writeln!(f, "{message}")?;
                writeln!(f, "[ Try Again ]  (type `retry`)")
            }
            PageView::Empty => {
                writeln!(f, "No skip options available for this location.")?;
                writeln!(f, "[ Refresh ]  (type `refresh`)")
            }
            PageView::Catalog { cards, can_proceed } => {
                for (index, card) in cards.iter().enumerate() {
                    writeln!(f, "{}", Card { position: index + 1, card })?;
                }
                writeln!(f, "{}", action_bar(*can_proceed))
            }
        }
    }
}

/// One card, numbered by its 1-based position on the page.
pub struct Card<'a> {
    pub position: usize,
    pub card: &'a SkipCard,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.card;
        let heading = format!("[{}] {} · {}", self.position, card.title, card.name);
        let price = format!("£{}", card.total_price);
        if card.selected {
            writeln!(f, "{}  {}", heading.blue().bold(), price.blue().bold())?;
        } else {
            writeln!(f, "{}  {}", heading.bold(), price.bold())?;
        }

        writeln!(f, "    {} Yards · {} day hire period", card.size, card.hire_period_days)?;
        if let Some(description) = card.description {
            writeln!(f, "    {description}")?;
        }
        writeln!(
            f,
            "    Length {} · Width {} · Height {}",
            card.dimensions.length, card.dimensions.width, card.dimensions.height
        )?;
        writeln!(f, "    Suitable for: {}", card.suitable_for.join(", "))?;
        writeln!(
            f,
            "    {}   {}",
            badge(card.allowed_on_road, "Road Placement", "No Road Placement"),
            badge(card.allows_heavy_waste, "Heavy Waste", "No Heavy Waste"),
        )?;
        if !card.allowed_on_road {
            writeln!(f, "    {}", "⚠ Not Allowed On The Road".yellow())?;
        }

        let button = if !card.selectable {
            "[ Not available ]".dimmed().to_string()
        } else if card.selected {
            "[ Selected ]".blue().bold().to_string()
        } else {
            "[ Select This Skip ]".to_string()
        };
        writeln!(f, "    {button}")
    }
}

pub fn render_page(view: &PageView) -> String {
    Page(view).to_string()
}

pub fn render_card(position: usize, card: &SkipCard) -> String {
    Card { position, card }.to_string()
}

fn badge(allowed: bool, yes: &str, no: &str) -> String {
    if allowed {
        format!("✓ {yes}").green().to_string()
    } else {
        format!("✕ {no}").red().to_string()
    }
}

fn action_bar(can_proceed: bool) -> String {
    let continue_button = if can_proceed {
        "[ Continue ]".blue().bold().to_string()
    } else {
        "[ Continue ] (select a skip first)".dimmed().to_string()
    };
    format!("[ Back ]  {continue_button}")
}
