/// Analysis report data model
///
/// These structs describe the record an analysis backend returns for a
/// roller-skating session: a visual description, timestamped ABA
/// observations with Portuguese/English transcription pairs, a behavior
/// summary, and two recommendation-style lists.
///
/// Field names serialize as camelCase because that is the JSON shape the
/// production analysis service is expected to speak.

use serde::{Deserialize, Serialize};

/// One timestamped observation from the session footage
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Which frame/time window the observation covers (e.g. "Frame 1 (0:00-0:05)")
    pub timestamp: String,
    /// The ABA technique identified (e.g. "Discrete Trial Training (DTT)")
    pub technique: String,
    /// What was observed in behavioral terms
    pub description: String,
    /// Transcribed speech in the original Portuguese
    pub portuguese: String,
    /// English translation of the transcription
    pub english: String,
}

/// The complete analysis record for one uploaded image set
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Narrative description of what the frames show
    pub visual_description: String,
    /// Per-frame observations, in session order
    pub observations: Vec<Observation>,
    /// Overall behavioral assessment
    pub behavior_summary: String,
    /// Reinforcement patterns identified across the session
    pub reinforcement_patterns: Vec<String>,
    /// Suggested next steps for the instructor
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Convert to JSON string (the wire format a real backend would return)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let report = crate::analysis::fixture::roller_skating_report();

        let json = report.to_json().unwrap();
        let restored = AnalysisReport::from_json(&json).unwrap();

        assert_eq!(report, restored);
    }

    #[test]
    fn test_camel_case_field_names() {
        let report = crate::analysis::fixture::roller_skating_report();
        let json = report.to_json().unwrap();

        // The backend contract uses camelCase keys
        assert!(json.contains("\"visualDescription\""));
        assert!(json.contains("\"behaviorSummary\""));
        assert!(json.contains("\"reinforcementPatterns\""));
        assert!(json.contains("\"portuguese\""));
    }
}
