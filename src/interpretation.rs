//! Narrative interpretation of manual-mode risk levels.

use crate::core::RiskLevel;

const HIGH_NARRATIVE: &str = "The reported aurora characteristics indicate high geomagnetic \
activity. Under these conditions the risk of GNSS and communication system degradation is high.";

const MODERATE_NARRATIVE: &str =
    "The aurora observations indicate moderate space weather activity.";

const LOW_NARRATIVE: &str = "The aurora observations indicate quiet space weather conditions.";

pub fn interpret(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => HIGH_NARRATIVE,
        RiskLevel::Moderate => MODERATE_NARRATIVE,
        RiskLevel::Low => LOW_NARRATIVE,
    }
}
