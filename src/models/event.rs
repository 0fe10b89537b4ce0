use serde::{Deserialize, Serialize};

/// Geographic position of an event venue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single bookable happening (concert, festival, exhibition...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display date, e.g. "27-30 Juin 2024"
    pub date: String,
    pub location: String,
    /// Ticket price in euros, 0 means free
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

impl Event {
    /// Creates an event with only the required attributes set
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date: String::new(),
            location: location.into(),
            price,
            category: category.into(),
            tags: Vec::new(),
            is_premium: false,
            coordinates: None,
            attendees: None,
            rating: None,
            reviews: None,
            image_url: None,
            organizer: None,
            booking_url: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Case-insensitive check against the category and every tag
    pub fn has_label(&self, label: &str) -> bool {
        eq_ignore_case(&self.category, label) || self.has_tag(label)
    }

    /// Case-insensitive check against the tag list only
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|tag| eq_ignore_case(tag, label))
    }
}

/// Unicode-aware case-insensitive equality ("Théâtre" == "THÉÂTRE")
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Unicode-aware case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
