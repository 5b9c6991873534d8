//! Six-step wizard controller.
//!
//! Owns one [`CampaignDraft`] per configuration session and sequences the
//! buyer through Basics, Screen Discovery, Slot Selection, Pricing Review,
//! Media Upload, and Final Review. Each step's exit conditions are checked
//! on `advance()`; failures come back as field-keyed data, never panics.

use crate::submission::SubmissionAdapter;
use crate::validation::ValidationErrors;
use chrono::NaiveDate;
use screenbook_core::draft::CampaignDraft;
use screenbook_core::error::{ScreenBookError, ScreenBookResult};
use screenbook_core::types::{MediaAsset, Screen};
use screenbook_pricing::{compute_pricing, PricingBreakdown};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// One step of the configuration wizard, numbered 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Basics = 1,
    ScreenDiscovery = 2,
    SlotSelection = 3,
    PricingReview = 4,
    MediaUpload = 5,
    FinalReview = 6,
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Basics
    }
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        Self::Basics,
        Self::ScreenDiscovery,
        Self::SlotSelection,
        Self::PricingReview,
        Self::MediaUpload,
        Self::FinalReview,
    ];

    /// 1-based position of this step.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Basics),
            2 => Some(Self::ScreenDiscovery),
            3 => Some(Self::SlotSelection),
            4 => Some(Self::PricingReview),
            5 => Some(Self::MediaUpload),
            6 => Some(Self::FinalReview),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        Self::from_index(self.index().wrapping_sub(1))
    }

    /// Short label shown in the step tracker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::ScreenDiscovery => "Screens",
            Self::SlotSelection => "Slots",
            Self::PricingReview => "Pricing",
            Self::MediaUpload => "Media",
            Self::FinalReview => "Review",
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Wizard state machine for one configuration session. All draft mutation
/// goes through this controller; the draft itself is exposed read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardController {
    draft: CampaignDraft,
    step: WizardStep,
    errors: ValidationErrors,
}

impl WizardController {
    /// Start a session with an empty draft at step 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session pre-seeded from an already-submitted campaign. The
    /// copy carries no identity and its name is marked as a copy.
    pub fn duplicate_of(existing: &CampaignDraft) -> Self {
        Self {
            draft: existing.duplicate(),
            step: WizardStep::Basics,
            errors: ValidationErrors::new(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Read model of the in-progress campaign.
    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    /// Validation failures from the most recent `advance()`/`submit()`.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    // ─── Navigation ─────────────────────────────────────────────────────

    /// Validate the current step's exit conditions and move forward.
    ///
    /// On failure the cursor stays put and the field-keyed errors are
    /// returned (and retained until the offending fields are edited).
    /// Advancing from the final step is a no-op; that step submits instead.
    pub fn advance(&mut self) -> Result<WizardStep, ValidationErrors> {
        let errors = self.validate_step(self.step);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Step back without validating or discarding anything.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Jump straight to a step (direct navigation from the step tracker).
    /// No validation runs; data for skipped steps may be incomplete.
    pub fn go_to(&mut self, step: WizardStep) -> WizardStep {
        self.step = step;
        self.step
    }

    /// Discard the draft and return to step 1.
    pub fn reset(&mut self) {
        self.draft = CampaignDraft::new();
        self.step = WizardStep::Basics;
        self.errors.clear();
    }

    // ─── Basics ─────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.errors.remove("name");
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.draft.start_date = Some(date);
        self.errors.remove("start_date");
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.draft.end_date = Some(date);
        self.errors.remove("end_date");
    }

    // ─── Screen discovery ───────────────────────────────────────────────

    pub fn select_screen(&mut self, screen: Screen) -> bool {
        self.errors.remove(ValidationErrors::GLOBAL);
        self.draft.select_screen(screen)
    }

    pub fn deselect_screen(&mut self, screen_id: &str) -> bool {
        self.errors.remove(ValidationErrors::GLOBAL);
        self.draft.deselect_screen(screen_id)
    }

    pub fn set_quantity(&mut self, screen_id: &str, quantity: u32) -> ScreenBookResult<u32> {
        self.draft.set_quantity(screen_id, quantity)
    }

    // ─── Slot selection ─────────────────────────────────────────────────

    pub fn toggle_hour(&mut self, screen_id: &str, hour: u8) -> ScreenBookResult<bool> {
        self.errors.remove(ValidationErrors::GLOBAL);
        self.draft.toggle_hour(screen_id, hour)
    }

    pub fn select_range(&mut self, screen_id: &str, hours: BTreeSet<u8>) -> ScreenBookResult<()> {
        self.errors.remove(ValidationErrors::GLOBAL);
        self.draft.select_range(screen_id, hours)
    }

    // ─── Media upload ───────────────────────────────────────────────────

    pub fn add_media(&mut self, screen_id: &str, asset: MediaAsset) -> ScreenBookResult<()> {
        self.draft.add_media(screen_id, asset)
    }

    pub fn remove_media(&mut self, screen_id: &str, asset_id: Uuid) -> bool {
        self.draft.remove_media(screen_id, asset_id)
    }

    // ─── Pricing & submission ───────────────────────────────────────────

    /// Derive the cost breakdown for the current draft snapshot.
    pub fn pricing(&self) -> PricingBreakdown {
        compute_pricing(&self.draft)
    }

    /// Submit the finished campaign through the adapter.
    ///
    /// Only available from the final review step. Every blocking validation
    /// is re-run first (steps are navigable out of order), then the draft
    /// snapshot and its pricing are handed off in one atomic call. On
    /// success the draft is discarded and the session returns to step 1; on
    /// failure the draft is kept for further edits.
    pub fn submit(&mut self, adapter: &dyn SubmissionAdapter) -> ScreenBookResult<String> {
        if self.step != WizardStep::FinalReview {
            return Err(ScreenBookError::Validation(format!(
                "submission is only available from the final review step, not {}",
                self.step.label()
            )));
        }

        let mut errors = self.validate_step(WizardStep::Basics);
        errors.merge(self.validate_step(WizardStep::ScreenDiscovery));
        errors.merge(self.validate_step(WizardStep::SlotSelection));
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(ScreenBookError::Validation(errors.to_string()));
        }

        let pricing = compute_pricing(&self.draft);
        let campaign_id = adapter.submit(&self.draft, &pricing)?;
        info!(
            campaign_id = %campaign_id,
            screens = pricing.screens.len(),
            grand_total = pricing.grand_total,
            "Campaign submitted"
        );
        self.reset();
        Ok(campaign_id)
    }

    // ─── Step validation ────────────────────────────────────────────────

    fn validate_step(&self, step: WizardStep) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        match step {
            WizardStep::Basics => {
                if self.draft.name.trim().is_empty() {
                    errors.insert("name", "Campaign Name is required");
                }
                if self.draft.start_date.is_none() {
                    errors.insert("start_date", "Start Date is required");
                }
                if self.draft.end_date.is_none() {
                    errors.insert("end_date", "End Date is required");
                }
                if let (Some(start), Some(end)) = (self.draft.start_date, self.draft.end_date) {
                    if end < start {
                        errors.insert("end_date", "End Date cannot be before Start Date");
                    }
                }
            }
            WizardStep::ScreenDiscovery => {
                if self.draft.selected_screens.is_empty() {
                    errors.insert_global("Please select at least one screen.");
                }
            }
            WizardStep::SlotSelection => {
                let all_covered = self
                    .draft
                    .selected_screens
                    .iter()
                    .all(|s| self.draft.slot_count(&s.id) > 0);
                if !all_covered {
                    errors.insert_global(
                        "Please select at least one hourly segment for every screen.",
                    );
                }
            }
            // Informational steps: pricing is derived, media is optional.
            WizardStep::PricingReview | WizardStep::MediaUpload | WizardStep::FinalReview => {}
        }
        errors
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MockSubmissionAdapter;
    use screenbook_core::draft::peak_hours;
    use screenbook_core::types::ScreenType;

    struct RejectingAdapter;

    impl SubmissionAdapter for RejectingAdapter {
        fn submit(
            &self,
            _draft: &CampaignDraft,
            _pricing: &PricingBreakdown,
        ) -> ScreenBookResult<String> {
            Err(ScreenBookError::Submission(
                "booking backend unavailable".to_string(),
            ))
        }
    }

    fn screen(id: &str, price: f64) -> Screen {
        Screen {
            id: id.to_string(),
            name: format!("Screen {}", id),
            location: "Salmiya".to_string(),
            governorate: "Hawally".to_string(),
            country: "Kuwait".to_string(),
            screen_type: ScreenType::Indoor,
            resolution: "1920x1080".to_string(),
            size: "55 inch".to_string(),
            total_quantity: 4,
            base_price_per_hour: price,
            audience: String::new(),
            description: String::new(),
            tags: Vec::new(),
            specs: Default::default(),
            metrics: Default::default(),
            demographics: Default::default(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// Drive a fresh controller to the final review step with one priced
    /// screen.
    fn configured_controller() -> WizardController {
        let mut wizard = WizardController::new();
        wizard.set_name("Summer Launch 2024");
        wizard.set_start_date(date("2024-01-01"));
        wizard.set_end_date(date("2024-01-02"));
        wizard.advance().unwrap();

        wizard.select_screen(screen("SCR-001", 50.0));
        wizard.advance().unwrap();

        for hour in [8, 9, 10] {
            wizard.toggle_hour("SCR-001", hour).unwrap();
        }
        wizard.advance().unwrap(); // -> PricingReview
        wizard.advance().unwrap(); // -> MediaUpload
        wizard.advance().unwrap(); // -> FinalReview
        assert_eq!(wizard.current_step(), WizardStep::FinalReview);
        wizard
    }

    #[test]
    fn test_step_numbering_and_labels() {
        assert_eq!(WizardStep::Basics.index(), 1);
        assert_eq!(WizardStep::FinalReview.index(), 6);
        assert_eq!(WizardStep::from_index(3), Some(WizardStep::SlotSelection));
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(7), None);
        assert_eq!(WizardStep::SlotSelection.label(), "Slots");
    }

    #[test]
    fn test_advance_from_basics_reports_field_errors() {
        let mut wizard = WizardController::new();
        wizard.set_name("");
        wizard.set_start_date(date("2024-01-01"));
        wizard.set_end_date(date("2023-12-31"));

        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Campaign Name is required"));
        assert_eq!(
            errors.get("end_date"),
            Some("End Date cannot be before Start Date")
        );
        assert_eq!(wizard.current_step(), WizardStep::Basics);
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let mut wizard = WizardController::new();
        wizard.set_name("   ");
        wizard.set_start_date(date("2024-01-01"));
        wizard.set_end_date(date("2024-01-05"));

        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn test_editing_a_field_clears_its_pending_error() {
        let mut wizard = WizardController::new();
        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.len(), 3);

        wizard.set_name("Brand Awareness");
        assert!(wizard.errors().get("name").is_none());
        assert!(wizard.errors().get("start_date").is_some());

        wizard.set_start_date(date("2024-02-10"));
        wizard.set_end_date(date("2024-03-10"));
        assert!(wizard.errors().is_empty());
        wizard.advance().unwrap();
    }

    #[test]
    fn test_screen_discovery_requires_a_selection() {
        let mut wizard = WizardController::new();
        wizard.set_name("Campaign");
        wizard.set_start_date(date("2024-01-01"));
        wizard.set_end_date(date("2024-01-01"));
        wizard.advance().unwrap();

        let errors = wizard.advance().unwrap_err();
        assert!(errors.get(ValidationErrors::GLOBAL).is_some());
        assert_eq!(wizard.current_step(), WizardStep::ScreenDiscovery);

        wizard.select_screen(screen("SCR-001", 50.0));
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::SlotSelection);
    }

    #[test]
    fn test_slot_selection_requires_segments_on_every_screen() {
        let mut wizard = WizardController::new();
        wizard.set_name("Campaign");
        wizard.set_start_date(date("2024-01-01"));
        wizard.set_end_date(date("2024-01-01"));
        wizard.advance().unwrap();
        wizard.select_screen(screen("SCR-001", 50.0));
        wizard.select_screen(screen("SCR-002", 15.0));
        wizard.advance().unwrap();

        wizard.toggle_hour("SCR-001", 9).unwrap();
        let errors = wizard.advance().unwrap_err();
        assert_eq!(
            errors.get(ValidationErrors::GLOBAL),
            Some("Please select at least one hourly segment for every screen.")
        );

        // Deselecting the empty screen also satisfies the step.
        wizard.deselect_screen("SCR-002");
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::PricingReview);
    }

    #[test]
    fn test_retreat_and_go_to_do_not_validate_or_discard() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.retreat(), WizardStep::Basics);

        wizard.set_name("Campaign");
        wizard.go_to(WizardStep::MediaUpload);
        assert_eq!(wizard.current_step(), WizardStep::MediaUpload);

        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::PricingReview);
        assert_eq!(wizard.draft().name, "Campaign");
    }

    #[test]
    fn test_pricing_on_incomplete_draft_is_zero_valued() {
        let mut wizard = WizardController::new();
        wizard.go_to(WizardStep::PricingReview);
        let pricing = wizard.pricing();
        assert_eq!(pricing.days, 0);
        assert_eq!(pricing.grand_total, 0.0);
    }

    #[test]
    fn test_advance_past_final_review_is_a_noop() {
        let mut wizard = configured_controller();
        assert_eq!(wizard.advance().unwrap(), WizardStep::FinalReview);
        assert_eq!(wizard.current_step(), WizardStep::FinalReview);
    }

    #[test]
    fn test_submit_requires_final_review_step() {
        let mut wizard = WizardController::new();
        let err = wizard.submit(&MockSubmissionAdapter::instant());
        assert!(matches!(err, Err(ScreenBookError::Validation(_))));
    }

    #[test]
    fn test_submit_revalidates_after_direct_navigation() {
        let mut wizard = WizardController::new();
        wizard.go_to(WizardStep::FinalReview);

        let err = wizard.submit(&MockSubmissionAdapter::instant());
        assert!(matches!(err, Err(ScreenBookError::Validation(_))));
        assert!(!wizard.errors().is_empty());
    }

    #[test]
    fn test_submit_hands_off_and_resets_the_session() {
        let mut wizard = configured_controller();
        let pricing = wizard.pricing();
        assert_eq!(pricing.grand_total, 300.0);

        let campaign_id = wizard.submit(&MockSubmissionAdapter::instant()).unwrap();
        assert!(campaign_id.starts_with("CMP-"));

        // Draft discarded, cursor back at step 1.
        assert_eq!(wizard.current_step(), WizardStep::Basics);
        assert!(wizard.draft().name.is_empty());
        assert!(wizard.draft().selected_screens.is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_the_draft_for_edits() {
        let mut wizard = configured_controller();
        let err = wizard.submit(&RejectingAdapter);
        assert!(matches!(err, Err(ScreenBookError::Submission(_))));

        assert_eq!(wizard.current_step(), WizardStep::FinalReview);
        assert_eq!(wizard.draft().name, "Summer Launch 2024");
    }

    #[test]
    fn test_reset_restores_the_empty_default() {
        let mut wizard = configured_controller();
        wizard.reset();
        assert_eq!(wizard.current_step(), WizardStep::Basics);
        assert!(wizard.draft().selected_screens.is_empty());
        assert!(wizard.draft().start_date.is_none());
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_duplicate_session_marks_name_and_keeps_selection() {
        let mut original = configured_controller();
        original.select_range("SCR-001", peak_hours()).unwrap();
        let wizard = WizardController::duplicate_of(original.draft());

        assert_eq!(wizard.current_step(), WizardStep::Basics);
        assert_eq!(wizard.draft().name, "Summer Launch 2024 (Copy)");
        assert_eq!(wizard.draft().slots_for("SCR-001"), peak_hours());
    }
}
