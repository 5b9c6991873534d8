//! In-memory screen store and the discovery filter.

use screenbook_core::error::{ScreenBookError, ScreenBookResult};
use screenbook_core::types::{AgeBand, GenderBand, NationalityBand, Screen, ScreenType};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Discovery-step filter. Every populated field must match (conjunctive);
/// an empty filter matches every screen. Filtering is stateless: the same
/// filter over a fixed catalog always yields the same result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenFilter {
    /// Case-insensitive substring match against name or location.
    pub search: Option<String>,
    pub governorate: Option<String>,
    pub screen_type: Option<ScreenType>,
    /// Dominant-gender band of the audience.
    pub gender: Option<GenderBand>,
    /// Dominant-age band of the audience.
    pub age_group: Option<AgeBand>,
    /// Dominant-nationality band of the audience.
    pub nationality: Option<NationalityBand>,
}

impl ScreenFilter {
    pub fn matches(&self, screen: &Screen) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = screen.name.to_lowercase().contains(&needle)
                || screen.location.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(governorate) = &self.governorate {
            if &screen.governorate != governorate {
                return false;
            }
        }
        if let Some(screen_type) = self.screen_type {
            if screen.screen_type != screen_type {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if screen.demographics.main_gender != gender {
                return false;
            }
        }
        if let Some(age_group) = self.age_group {
            if screen.demographics.main_age_group != age_group {
                return false;
            }
        }
        if let Some(nationality) = self.nationality {
            if screen.demographics.main_nationality != nationality {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Fixed collection of bookable screens. Records are validated on insert
/// and immutable afterwards; the wizard only ever reads from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenCatalog {
    screens: Vec<Screen>,
}

impl ScreenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a screen, enforcing the catalog invariants (unique non-empty id,
    /// positive base price, at least one physical unit).
    pub fn insert(&mut self, screen: Screen) -> ScreenBookResult<()> {
        screen.validate()?;
        if self.get(&screen.id).is_some() {
            return Err(ScreenBookError::Catalog(format!(
                "duplicate screen id {}",
                screen.id
            )));
        }
        self.screens.push(screen);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// All screens in catalog order.
    pub fn list(&self) -> &[Screen] {
        &self.screens
    }

    pub fn get(&self, screen_id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == screen_id)
    }

    /// Screens matching every populated filter field, in catalog order.
    pub fn filter(&self, filter: &ScreenFilter) -> Vec<Screen> {
        self.screens
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    /// Load a catalog snapshot from a JSON array of screen records.
    pub fn from_json_reader(reader: impl Read) -> ScreenBookResult<Self> {
        let screens: Vec<Screen> = serde_json::from_reader(reader)?;
        let mut catalog = Self::new();
        for screen in screens {
            catalog.insert(screen)?;
        }
        info!(screens = catalog.len(), "Catalog snapshot loaded");
        Ok(catalog)
    }

    /// Load a catalog snapshot from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> ScreenBookResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
