//! Campaign draft aggregate — the single mutable object holding everything a
//! buyer has entered for one in-progress campaign, plus the slot-selection
//! operations that keep its per-screen state consistent.
//!
//! A draft is owned by exactly one wizard controller for the lifetime of a
//! configuration session. It is never partially persisted: it is discarded on
//! successful submission or on reset.

use crate::error::{ScreenBookError, ScreenBookResult};
use crate::types::{MediaAsset, Screen};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Last valid hourly segment index (inclusive).
pub const MAX_HOUR: u8 = 23;

// ---------------------------------------------------------------------------
// Hour presets
// ---------------------------------------------------------------------------
//
// Fixed bulk-selection windows. These are independent of the pricing
// multiplier bands and intentionally stay so: 08:00-17:59 is the booking
// convention for "peak", while pricing slices the day at 6/12/18/22.

/// Every hourly segment of the day, `00:00` through `23:00`.
pub fn all_hours() -> BTreeSet<u8> {
    (0..=MAX_HOUR).collect()
}

/// The fixed peak booking window, hours 8 through 17 inclusive.
pub fn peak_hours() -> BTreeSet<u8> {
    (8..=17).collect()
}

/// Complement of [`peak_hours`]: hours 0-7 and 18-23.
pub fn off_peak_hours() -> BTreeSet<u8> {
    (0..=MAX_HOUR).filter(|h| !(8..=17).contains(h)).collect()
}

// ---------------------------------------------------------------------------
// Campaign draft
// ---------------------------------------------------------------------------

/// All user-entered state for one campaign being configured.
///
/// Per-screen maps (`screen_slots`, `media_files`, `screen_quantities`) only
/// ever hold keys for screens present in `selected_screens`; deselecting a
/// screen removes every trace of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Selected screens in insertion order. Unique by id; order matters only
    /// for display, never for pricing.
    pub selected_screens: Vec<Screen>,
    /// screen id -> selected hourly segments (0-23), ascending.
    pub screen_slots: BTreeMap<String, BTreeSet<u8>>,
    /// screen id -> uploaded creative descriptors, in upload order.
    pub media_files: BTreeMap<String, Vec<MediaAsset>>,
    /// screen id -> purchased duplicate count. Absent means 1.
    pub screen_quantities: BTreeMap<String, u32>,
}

impl CampaignDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a new draft from an already-submitted campaign. Identity is not
    /// carried over; a non-empty name is marked as a copy.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        if !copy.name.trim().is_empty() {
            copy.name = format!("{} (Copy)", copy.name);
        }
        copy
    }

    // ─── Screen set ─────────────────────────────────────────────────────

    pub fn is_screen_selected(&self, screen_id: &str) -> bool {
        self.selected_screens.iter().any(|s| s.id == screen_id)
    }

    /// Add a screen to the selection. Returns `false` if it was already
    /// selected (the selection is unchanged).
    pub fn select_screen(&mut self, screen: Screen) -> bool {
        if self.is_screen_selected(&screen.id) {
            return false;
        }
        self.selected_screens.push(screen);
        true
    }

    /// Remove a screen and all of its per-screen state (slots, media,
    /// quantity). Returns `false` if the screen was not selected.
    pub fn deselect_screen(&mut self, screen_id: &str) -> bool {
        let before = self.selected_screens.len();
        self.selected_screens.retain(|s| s.id != screen_id);
        if self.selected_screens.len() == before {
            return false;
        }
        self.remove_screen_slots(screen_id);
        self.media_files.remove(screen_id);
        self.screen_quantities.remove(screen_id);
        true
    }

    fn screen(&self, screen_id: &str) -> ScreenBookResult<&Screen> {
        self.selected_screens
            .iter()
            .find(|s| s.id == screen_id)
            .ok_or_else(|| {
                ScreenBookError::Validation(format!("screen {} is not selected", screen_id))
            })
    }

    // ─── Slot selection ─────────────────────────────────────────────────

    fn check_hour(hour: u8) -> ScreenBookResult<()> {
        if hour > MAX_HOUR {
            return Err(ScreenBookError::Validation(format!(
                "hour {} is outside 0..={}",
                hour, MAX_HOUR
            )));
        }
        Ok(())
    }

    /// Toggle one hourly segment on a selected screen: added if absent,
    /// removed if present. Self-inverse. Returns whether the hour is
    /// selected afterwards.
    pub fn toggle_hour(&mut self, screen_id: &str, hour: u8) -> ScreenBookResult<bool> {
        Self::check_hour(hour)?;
        self.screen(screen_id)?;
        let slots = self.screen_slots.entry(screen_id.to_string()).or_default();
        if slots.remove(&hour) {
            Ok(false)
        } else {
            slots.insert(hour);
            Ok(true)
        }
    }

    /// Replace the full segment set for a screen. Used by the bulk helpers
    /// (select all, clear, peak/off-peak); the hours are caller-supplied.
    pub fn select_range(&mut self, screen_id: &str, hours: BTreeSet<u8>) -> ScreenBookResult<()> {
        if let Some(max) = hours.iter().next_back() {
            Self::check_hour(*max)?;
        }
        self.screen(screen_id)?;
        self.screen_slots.insert(screen_id.to_string(), hours);
        Ok(())
    }

    /// Drop a screen's slot entry entirely (invoked on deselection).
    pub fn remove_screen_slots(&mut self, screen_id: &str) {
        self.screen_slots.remove(screen_id);
    }

    /// Segments selected for a screen, ascending. Empty if none.
    pub fn slots_for(&self, screen_id: &str) -> BTreeSet<u8> {
        self.screen_slots.get(screen_id).cloned().unwrap_or_default()
    }

    pub fn slot_count(&self, screen_id: &str) -> usize {
        self.screen_slots.get(screen_id).map_or(0, BTreeSet::len)
    }

    /// Total selected segments across every screen.
    pub fn total_segments(&self) -> usize {
        self.screen_slots.values().map(BTreeSet::len).sum()
    }

    // ─── Quantities ─────────────────────────────────────────────────────

    /// Duplicate count purchased for a screen. Defaults to 1.
    pub fn quantity_for(&self, screen_id: &str) -> u32 {
        self.screen_quantities.get(screen_id).copied().unwrap_or(1)
    }

    /// Set the duplicate count for a selected screen, clamped into
    /// `[1, total_quantity]`. Returns the stored value.
    pub fn set_quantity(&mut self, screen_id: &str, quantity: u32) -> ScreenBookResult<u32> {
        let max = self.screen(screen_id)?.total_quantity;
        let clamped = quantity.clamp(1, max);
        self.screen_quantities.insert(screen_id.to_string(), clamped);
        Ok(clamped)
    }

    // ─── Media ──────────────────────────────────────────────────────────

    /// Attach a creative descriptor to a selected screen.
    pub fn add_media(&mut self, screen_id: &str, asset: MediaAsset) -> ScreenBookResult<()> {
        self.screen(screen_id)?;
        self.media_files
            .entry(screen_id.to_string())
            .or_default()
            .push(asset);
        Ok(())
    }

    /// Detach one creative by id. The screen's entry disappears once its
    /// list empties. Returns `false` if the asset was not found.
    pub fn remove_media(&mut self, screen_id: &str, asset_id: Uuid) -> bool {
        let Some(files) = self.media_files.get_mut(screen_id) else {
            return false;
        };
        let before = files.len();
        files.retain(|f| f.id != asset_id);
        let removed = files.len() != before;
        if files.is_empty() {
            self.media_files.remove(screen_id);
        }
        removed
    }

    /// Creatives attached to a screen, in upload order.
    pub fn media_for(&self, screen_id: &str) -> &[MediaAsset] {
        self.media_files.get(screen_id).map_or(&[], Vec::as_slice)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
