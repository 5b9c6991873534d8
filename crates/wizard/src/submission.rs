//! Hand-off seam to the external submission collaborator.

use rand::Rng;
use screenbook_core::draft::CampaignDraft;
use screenbook_core::error::ScreenBookResult;
use screenbook_pricing::PricingBreakdown;
use std::time::Duration;
use tracing::info;

/// External consumer of a finished campaign. The controller passes an
/// immutable snapshot of the draft and its derived pricing in one atomic
/// call; the returned string is the generated campaign identifier.
///
/// The core neither retries nor interprets failures beyond surfacing them.
pub trait SubmissionAdapter {
    fn submit(
        &self,
        draft: &CampaignDraft,
        pricing: &PricingBreakdown,
    ) -> ScreenBookResult<String>;
}

/// Development stand-in for the booking backend: waits a moment, then
/// accepts the campaign under a generated `CMP-<n>` identifier.
pub struct MockSubmissionAdapter {
    delay: Duration,
}

impl MockSubmissionAdapter {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }

    /// No simulated latency. Used by tests.
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Default for MockSubmissionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionAdapter for MockSubmissionAdapter {
    fn submit(
        &self,
        draft: &CampaignDraft,
        pricing: &PricingBreakdown,
    ) -> ScreenBookResult<String> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let campaign_id = format!("CMP-{}", rand::thread_rng().gen_range(0..10_000));
        info!(
            campaign_id = %campaign_id,
            name = %draft.name,
            screens = pricing.screens.len(),
            days = pricing.days,
            grand_total = pricing.grand_total,
            "Mock submission accepted"
        );
        Ok(campaign_id)
    }
}
