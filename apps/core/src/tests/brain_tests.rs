//! Brain Module Tests
//!
//! Keyword detection, crisis recall, risk classification and response
//! selection across the built-in tables.

use crate::brain::responses::{TemplateRegistry, CRISIS_RESOURCES};
use crate::brain::{
    classify_sentiment, Category, KeywordMatcher, ResponsePath, ResponseSelector, Sentiment,
};
use crate::models::{ConversationStage, ConversationState, SuggestedAction};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn crisis_keywords() -> Vec<String> {
    KeywordMatcher::new()
        .patterns()
        .iter()
        .filter(|p| p.category.is_crisis())
        .flat_map(|p| p.keywords.clone())
        .collect()
}

#[cfg(test)]
mod keyword_detection_tests {
    use super::*;

    #[test]
    fn test_detection_is_deterministic() {
        let matcher = KeywordMatcher::new();
        let text = "Ich bin traurig, einsam und habe Angst vor der Trennung";
        let first = matcher.detect(text);
        for _ in 0..20 {
            assert_eq!(matcher.detect(text), first);
        }
        assert_eq!(
            first,
            vec![
                Category::Depression,
                Category::Anxiety,
                Category::Loneliness,
                Category::Relationship
            ]
        );
    }

    #[test]
    fn test_stress_scenario_text() {
        let detected = KeywordMatcher::new().detect("Ich fühle mich gestresst und überfordert");
        assert!(detected.contains(&Category::Stress));
        assert_eq!(classify_sentiment(&detected), Sentiment::Concerning);
    }

    #[test]
    fn test_case_and_accent_insensitive() {
        let matcher = KeywordMatcher::new();
        assert_eq!(matcher.detect("ERSCHÖPFT"), vec![Category::Burnout]);
        assert_eq!(matcher.detect("erschopft"), vec![Category::Burnout]);
        assert_eq!(matcher.detect("Ich bin Nervös"), vec![Category::Anxiety]);
    }

    #[test]
    fn test_benign_text_detects_nothing() {
        let matcher = KeywordMatcher::new();
        for text in ["", "   ", "Guten Morgen", "Das Wetter ist schön", "12345 ?!"] {
            assert!(matcher.detect(text).is_empty(), "unexpected match for {:?}", text);
        }
    }
}

#[cfg(test)]
mod crisis_recall_tests {
    use super::*;

    #[test]
    fn test_every_crisis_keyword_triggers_crisis() {
        let matcher = KeywordMatcher::new();
        let keywords = crisis_keywords();
        assert!(!keywords.is_empty());

        for keyword in keywords {
            for text in [
                keyword.clone(),
                format!("Manchmal denke ich: {}.", keyword),
                format!("{} - ich weiß nicht weiter, ich bin so müde und gestresst", keyword.to_uppercase()),
            ] {
                let detected = matcher.detect(&text);
                assert_eq!(
                    classify_sentiment(&detected),
                    Sentiment::Crisis,
                    "Crisis missed for {:?}",
                    text
                );
            }
        }
    }

    #[test]
    fn test_german_crisis_phrases() {
        let matcher = KeywordMatcher::new();
        let phrases = [
            "Ich will sterben",
            "Ich bin lebensmüde",
            "Ich denke an Suizid",
            "Ich will mich umbringen",
            "Ich möchte nicht mehr leben",
            "Ich will mein Leben beenden",
            "Ich sehe keinen Ausweg mehr",
            "Ich ritze mich wieder",
            "Ich will mir weh tun",
            "I want to die",
        ];
        for phrase in phrases {
            assert_eq!(
                classify_sentiment(&matcher.detect(phrase)),
                Sentiment::Crisis,
                "Crisis missed for {:?}",
                phrase
            );
        }
    }

    #[test]
    fn test_inflected_and_paraphrased_crisis_phrases() {
        let matcher = KeywordMatcher::new();
        let phrases = [
            "Ich will mich töten",
            "Ich möchte mich selbst töten",
            "Manchmal überlege ich, mich zu töten",
            "Ich bringe mich um",
            "Ich bring mich um, wenn das so weitergeht",
            "Ich denke daran, mich umzubringen",
            "Ich habe Suizidgedanken",
            "Ich bin suizidal",
            "Ich habe Selbstmordgedanken",
            "Ich möchte einfach nicht mehr da sein",
            "Ich wünsche mir, morgen nicht mehr aufzuwachen",
            "Am liebsten würde ich nicht mehr aufwachen",
            "Ich will mich selbst verletzen",
            "Ich verletze mich absichtlich",
            "I feel suicidal",
            "I want to end it all",
            "Sometimes I want to harm myself",
        ];
        let missed: Vec<&str> = phrases
            .iter()
            .copied()
            .filter(|p| classify_sentiment(&matcher.detect(p)) != Sentiment::Crisis)
            .collect();
        assert!(missed.is_empty(), "Crisis missed for {:?}", missed);
    }

    #[test]
    fn test_crisis_response_regardless_of_state() {
        let selector = ResponseSelector::default();

        let mut advanced = ConversationState::new();
        advanced.conversation_stage = ConversationStage::AssessmentOffer;
        advanced.has_offered_assessment = true;
        advanced.detected_concerns.extend([Category::Stress, Category::Anxiety, Category::Sleep]);
        let mut closed = ConversationState::new();
        closed.close();

        for state in [ConversationState::new(), advanced, closed] {
            let out = selector.generate_with_rng("Ich will sterben", &state, &mut StdRng::seed_from_u64(7));
            assert_eq!(out.path, ResponsePath::Crisis);
            assert_eq!(out.metadata.suggested_action, Some(SuggestedAction::CrisisResources));
            assert!(out.response.contains("112"));
            assert!(out.response.contains("0800 111 0 111"));
        }
    }

    #[test]
    fn test_negation_still_matches_known_limitation() {
        // Substring matching has no negation handling; this is a known false positive.
        let detected = KeywordMatcher::new().detect("Keine Sorge, ich will NICHT sterben");
        assert_eq!(classify_sentiment(&detected), Sentiment::Crisis);
    }

    #[test]
    fn test_benign_phrases_are_not_crisis() {
        let matcher = KeywordMatcher::new();
        let phrases = [
            "Meine Oma ist letztes Jahr gestorben",
            "Ich habe viel Stress bei der Arbeit",
            "Wie funktioniert das Matching?",
            "Was kostet eine Therapiesitzung?",
            "Ich brauche Hilfe bei der Suche",
            "Am Totensonntag denke ich an die Toten",
        ];
        for phrase in phrases {
            assert_ne!(
                classify_sentiment(&matcher.detect(phrase)),
                Sentiment::Crisis,
                "False positive for {:?}",
                phrase
            );
        }
    }
}

#[cfg(test)]
mod response_selection_tests {
    use super::*;

    #[test]
    fn test_single_category_uses_template_action() {
        let selector = ResponseSelector::default();
        let registry = TemplateRegistry::default();
        let out = selector.generate_with_rng(
            "Ich kann nicht schlafen",
            &ConversationState::new(),
            &mut StepRng::new(0, 0),
        );
        let sleep = registry.get(Category::Sleep).unwrap();
        assert_eq!(out.path, ResponsePath::SingleCategory);
        assert_eq!(out.metadata.suggested_action, sleep.suggested_action);
        assert_eq!(out.metadata.detected_topics, vec![Category::Sleep]);
        assert_eq!(out.metadata.sentiment, Some(Sentiment::Concerning));
    }

    #[test]
    fn test_positive_turn() {
        let selector = ResponseSelector::default();
        let out = selector.generate_with_rng(
            "Ich suche eine Therapeutin",
            &ConversationState::new(),
            &mut StepRng::new(0, 0),
        );
        assert_eq!(out.metadata.detected_topics, vec![Category::TherapyInquiry]);
        assert_eq!(out.metadata.sentiment, Some(Sentiment::Positive));
        assert_eq!(out.metadata.suggested_action, Some(SuggestedAction::ContactSupport));
    }

    #[test]
    fn test_crisis_follow_up_is_last_paragraph() {
        let selector = ResponseSelector::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let out = selector.generate_with_rng("Ich ritze mich manchmal", &ConversationState::new(), &mut rng);
            assert_eq!(out.path, ResponsePath::Crisis);
            assert!(out.response.ends_with(CRISIS_RESOURCES));
            assert_eq!(out.response.matches("\n\n").count(), 1);
        }
    }

    #[test]
    fn test_variants_come_from_template() {
        let selector = ResponseSelector::default();
        let registry = TemplateRegistry::default();
        let anxiety = registry.get(Category::Anxiety).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let out = selector.generate_with_rng("Ich habe Panik", &ConversationState::new(), &mut rng);
            assert!(anxiety.responses.contains(&out.response));
        }
    }
}
