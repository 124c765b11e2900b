/// Canned analysis payload
///
/// The simulated result shown while no real analysis service exists. This is
/// fixture data, not business logic: it lives behind the same interface a
/// production backend would implement (see `analysis::mock`), so swapping in
/// a real service never touches the presentation layer.

use super::report::{AnalysisReport, Observation};

/// Build the constant roller-skating session report.
///
/// Content is independent of which or how many images were uploaded:
/// 5 observations, 5 reinforcement patterns, 6 recommendations.
pub fn roller_skating_report() -> AnalysisReport {
    AnalysisReport {
        visual_description: "The sequence shows a young girl engaged in roller skating \
            activities on a smooth outdoor surface. She demonstrates progressive skill \
            development across multiple frames, moving from assisted balance work to \
            independent skating movements. Her body positioning shows appropriate weight \
            distribution and postural control typical of beginner-intermediate roller \
            skating competency."
            .to_string(),
        observations: vec![
            Observation {
                timestamp: "Frame 1 (0:00-0:05)".to_string(),
                technique: "Discrete Trial Training (DTT)".to_string(),
                description: "Instructor provides clear, single-step instruction for initial positioning"
                    .to_string(),
                portuguese: "Coloca o pé direito na frente, assim. Muito bem!".to_string(),
                english: "Put your right foot forward, like this. Very good!".to_string(),
            },
            Observation {
                timestamp: "Frame 2 (0:06-0:12)".to_string(),
                technique: "Physical Prompting + Positive Reinforcement".to_string(),
                description: "Gentle hand guidance with immediate verbal praise following correct movement"
                    .to_string(),
                portuguese: "Isso mesmo! Você está indo muito bem. Olha como você consegue!"
                    .to_string(),
                english: "That's right! You're doing very well. Look how you can do it!"
                    .to_string(),
            },
            Observation {
                timestamp: "Frame 3 (0:13-0:20)".to_string(),
                technique: "Verbal Behavior - Manding".to_string(),
                description: "Child demonstrates requesting behavior for continued activity"
                    .to_string(),
                portuguese: "Quero mais! Posso fazer de novo?".to_string(),
                english: "I want more! Can I do it again?".to_string(),
            },
            Observation {
                timestamp: "Frame 4 (0:21-0:28)".to_string(),
                technique: "Fading Prompts".to_string(),
                description: "Gradual reduction of physical support as child gains confidence"
                    .to_string(),
                portuguese: "Agora tenta sozinha. Eu estou aqui pertinho.".to_string(),
                english: "Now try by yourself. I'm right here close by.".to_string(),
            },
            Observation {
                timestamp: "Frame 5 (0:29-0:35)".to_string(),
                technique: "Natural Environment Training (NET)".to_string(),
                description: "Skills practiced in functional, motivating context of play activity"
                    .to_string(),
                portuguese: "Vamos até aquela árvore! Você consegue!".to_string(),
                english: "Let's go to that tree! You can do it!".to_string(),
            },
        ],
        behavior_summary: "The child exhibits strong motivation and engagement throughout \
            the activity, demonstrating key behavioral indicators of successful learning: \
            sustained attention, compliance with instructions, spontaneous requesting for \
            continuation, and visible pleasure responses. Motor planning and execution \
            improve across trials, consistent with skill acquisition trajectory."
            .to_string(),
        reinforcement_patterns: vec![
            "Continuous reinforcement schedule during initial acquisition phase".to_string(),
            "Social reinforcement (praise, enthusiasm) paired with activity access".to_string(),
            "Natural consequences (successful movement, fun experience) as primary motivator"
                .to_string(),
            "Descriptive praise specifying correct behaviors ('you're keeping your balance')"
                .to_string(),
            "Non-contingent attention maintained throughout to support engagement".to_string(),
        ],
        recommendations: vec![
            "Continue current reinforcement schedule; consider thinning to intermittent once skill consolidates"
                .to_string(),
            "Introduce peer models for observational learning opportunities".to_string(),
            "Expand verbal behavior targets: tacting (labeling skating actions), intraverbals (answering questions about the activity)"
                .to_string(),
            "Data collection suggestion: Track number of independent pushes, duration of balance maintenance, frequency of requesting continuation"
                .to_string(),
            "Generalization planning: Vary surfaces, introduce different skating contexts, practice with different instructors"
                .to_string(),
            "Safety note: Maintain current level of physical proximity given skill level; ensure protective equipment always worn"
                .to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let report = roller_skating_report();

        assert_eq!(report.observations.len(), 5);
        assert_eq!(report.reinforcement_patterns.len(), 5);
        assert_eq!(report.recommendations.len(), 6);
        assert!(!report.visual_description.is_empty());
        assert!(!report.behavior_summary.is_empty());
    }

    #[test]
    fn test_fixture_is_deterministic() {
        assert_eq!(roller_skating_report(), roller_skating_report());
    }

    #[test]
    fn test_observations_carry_both_languages() {
        let report = roller_skating_report();

        for obs in &report.observations {
            assert!(!obs.portuguese.is_empty());
            assert!(!obs.english.is_empty());
            assert!(!obs.technique.is_empty());
        }
    }
}
