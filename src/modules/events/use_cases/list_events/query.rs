use crate::modules::events::core::filters::{EventFilter, SearchFields};
use serde::Deserialize;

/// Which slice of the collection a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventView {
    /// Every event, ordered by start date falling back to the creation time.
    #[default]
    All,
    Active,
    Historical,
}

impl EventView {
    pub fn parse(raw: &str) -> Option<EventView> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(EventView::All),
            "active" => Some(EventView::Active),
            "historical" | "history" => Some(EventView::Historical),
            _ => None,
        }
    }

    /// The browse view searches organizers, the status views search descriptions.
    pub fn search_fields(self) -> SearchFields {
        match self {
            EventView::All => SearchFields::TitleOrganizerTags,
            EventView::Active | EventView::Historical => SearchFields::TitleDescriptionTags,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEventsQuery {
    pub view: EventView,
    pub filter: EventFilter,
    pub page: usize,
    pub page_size: Option<usize>,
}
