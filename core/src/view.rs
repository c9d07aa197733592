//! View model for the skip selection page.
//!
//! # Design
//! `PageView::from_state` is a pure projection of `SelectionState`; the
//! renderer only ever looks at the view, never at raw state. Exactly one of
//! the four variants applies at a time.

use crate::controller::{SelectionState, Status};
use crate::profile::{profile_for, Dimensions};
use crate::types::{SkipId, SkipOption};

/// How many "suitable for" entries a card lists.
const SUITABILITY_SHOWN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    /// Offers a retry.
    Error { message: String },
    /// Offers a refresh.
    Empty,
    Catalog { cards: Vec<SkipCard>, can_proceed: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkipCard {
    pub id: SkipId,
    pub size: u32,
    pub title: String,
    pub name: String,
    pub description: Option<&'static str>,
    pub hire_period_days: u32,
    pub total_price: i64,
    pub dimensions: Dimensions,
    pub suitable_for: Vec<&'static str>,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub selected: bool,
    pub selectable: bool,
}

impl SkipCard {
    pub fn new(option: &SkipOption, selected: bool) -> Self {
        let profile = profile_for(option.size);
        Self {
            id: option.id,
            size: option.size,
            title: format!("{} Yard Skip", option.size),
            name: profile.name,
            description: profile.description,
            hire_period_days: option.hire_period_days,
            total_price: option.display_price(),
            dimensions: profile.dimensions,
            suitable_for: profile.suitable_for.iter().take(SUITABILITY_SHOWN).copied().collect(),
            allowed_on_road: option.allowed_on_road,
            allows_heavy_waste: option.allows_heavy_waste,
            selected,
            selectable: option.is_selectable(),
        }
    }
}

impl PageView {
    pub fn from_state(state: &SelectionState) -> Self {
        match &state.status {
            Status::Loading => PageView::Loading,
            Status::Error(message) => PageView::Error {
                message: message.clone(),
            },
            Status::Empty => PageView::Empty,
            Status::Loaded if state.catalog.is_empty() => PageView::Empty,
            Status::Loaded => {
                let cards = state
                    .catalog
                    .iter()
                    .map(|option| SkipCard::new(option, state.selected_id == Some(option.id)))
                    .collect();
                PageView::Catalog {
                    cards,
                    can_proceed: state.can_proceed(),
                }
            }
        }
    }
}
