use crate::error::{ScreenBookError, ScreenBookResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical placement of a display screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenType {
    Outdoor,
    Indoor,
}

impl std::fmt::Display for ScreenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outdoor => write!(f, "Outdoor"),
            Self::Indoor => write!(f, "Indoor"),
        }
    }
}

// ─── Demographic Bands ──────────────────────────────────────────────────

/// Dominant gender of a screen's audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderBand {
    Male,
    Female,
}

/// Dominant age group of a screen's audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Boomers,
    GenX,
    Millennials,
    GenZ,
}

impl AgeBand {
    /// Label shown in discovery filters, with the age range spelled out.
    pub fn label(self) -> &'static str {
        match self {
            Self::Boomers => "Boomers (61-80)",
            Self::GenX => "GenX (45-60)",
            Self::Millennials => "Millennials (29 - 44)",
            Self::GenZ => "Gen Z (Less Than 28)",
        }
    }
}

/// Dominant nationality segment of a screen's audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NationalityBand {
    Kuwaiti,
    Arab,
    NonArab,
}

impl NationalityBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Kuwaiti => "Kuwaiti",
            Self::Arab => "Arab",
            Self::NonArab => "Non Arab",
        }
    }
}

// ─── Demographics ───────────────────────────────────────────────────────

/// Audience percentage split by nationality. Each field is a percentage;
/// the three sum to roughly 100.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NationalitySplit {
    #[serde(default)]
    pub kuwaiti: u8,
    #[serde(default)]
    pub arab: u8,
    #[serde(default)]
    pub non_arab: u8,
}

/// Audience percentage split by gender.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenderSplit {
    #[serde(default)]
    pub male: u8,
    #[serde(default)]
    pub female: u8,
}

/// Audience percentage split by age group.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AgeSplit {
    #[serde(default)]
    pub boomers: u8,
    #[serde(default)]
    pub gen_x: u8,
    #[serde(default)]
    pub millennials: u8,
    #[serde(default)]
    pub gen_z: u8,
}

/// Audience profile for a screen. Percentage splits plus the resolved
/// dominant band per category, fixed once at the catalog boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub nationality: NationalitySplit,
    #[serde(default)]
    pub gender: GenderSplit,
    #[serde(default)]
    pub age: AgeSplit,
    pub main_gender: GenderBand,
    pub main_age_group: AgeBand,
    pub main_nationality: NationalityBand,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            nationality: NationalitySplit::default(),
            gender: GenderSplit::default(),
            age: AgeSplit::default(),
            main_gender: GenderBand::Male,
            main_age_group: AgeBand::Millennials,
            main_nationality: NationalityBand::Kuwaiti,
        }
    }
}

// ─── Reach & Specs ──────────────────────────────────────────────────────

/// Impression counts reported by the screen operator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReachMetrics {
    #[serde(default)]
    pub daily: u64,
    #[serde(default)]
    pub weekly: u64,
    #[serde(default)]
    pub monthly: u64,
}

/// Physical and playback specifications of a screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSpecs {
    #[serde(default)]
    pub physical_size: String,
    #[serde(default = "default_operating_hours")]
    pub operating_hours: String,
    #[serde(default = "default_slot_duration")]
    pub slot_duration: String,
    #[serde(default = "default_loop_length")]
    pub loop_length: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub resolution_text: String,
}

fn default_operating_hours() -> String {
    "10:00 AM - 10:00 PM".to_string()
}
fn default_slot_duration() -> String {
    "180 seconds".to_string()
}
fn default_loop_length() -> String {
    "180 seconds".to_string()
}
fn default_category() -> String {
    "General".to_string()
}

impl Default for ScreenSpecs {
    fn default() -> Self {
        Self {
            physical_size: String::new(),
            operating_hours: default_operating_hours(),
            slot_duration: default_slot_duration(),
            loop_length: default_loop_length(),
            category: default_category(),
            resolution_text: String::new(),
        }
    }
}

// ─── Screen ─────────────────────────────────────────────────────────────

/// A physical display asset available for campaign booking. Owned by the
/// screen catalog; the wizard and pricing engine only ever read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    /// Catalog-assigned identifier, e.g. `SCR-001`.
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub governorate: String,
    #[serde(default)]
    pub country: String,
    pub screen_type: ScreenType,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub size: String,
    /// Number of physical duplicates of this screen at the site.
    #[serde(default = "default_total_quantity")]
    pub total_quantity: u32,
    /// Base airtime price for one hourly segment, before multipliers.
    pub base_price_per_hour: f64,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub specs: ScreenSpecs,
    #[serde(default)]
    pub metrics: ReachMetrics,
    #[serde(default)]
    pub demographics: Demographics,
}

fn default_total_quantity() -> u32 {
    1
}

impl Screen {
    /// Check the catalog invariants for this record.
    pub fn validate(&self) -> ScreenBookResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScreenBookError::Catalog("screen id must not be empty".into()));
        }
        if self.base_price_per_hour <= 0.0 {
            return Err(ScreenBookError::Catalog(format!(
                "screen {} has non-positive base price {}",
                self.id, self.base_price_per_hour
            )));
        }
        if self.total_quantity == 0 {
            return Err(ScreenBookError::Catalog(format!(
                "screen {} has zero total quantity",
                self.id
            )));
        }
        Ok(())
    }
}

// ─── Media ──────────────────────────────────────────────────────────────

/// Metadata descriptor for an uploaded creative asset. The binary content
/// lives with the upload collaborator, never in the draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl MediaAsset {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}
