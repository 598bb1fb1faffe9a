use std::sync::Arc;

use rapport_scoring::error::ScoringError;
use rapport_scoring::lexicon::LexiconClassifier;
use rapport_scoring::sentiment::{
    Classification, SentimentClassifier, SentimentLabel, SentimentScorer,
};

struct Fixed(Classification);

impl SentimentClassifier for Fixed {
    fn classify(&self, _text: &str) -> Result<Classification, ScoringError> {
        Ok(self.0)
    }
}

fn fixed(label: SentimentLabel, confidence: f64) -> Arc<dyn SentimentClassifier> {
    Arc::new(Fixed(Classification { label, confidence }))
}

#[test]
fn negative_scales_confidence_to_ten() {
    let scorer = SentimentScorer::loaded(fixed(SentimentLabel::Negative, 0.9));
    assert_eq!(scorer.score("anything").unwrap(), 9.0);
}

#[test]
fn positive_scores_zero() {
    let scorer = SentimentScorer::loaded(fixed(SentimentLabel::Positive, 0.99));
    assert_eq!(scorer.score("anything").unwrap(), 0.0);
}

#[test]
fn unloaded_scorer_is_unavailable_not_zero() {
    let scorer = SentimentScorer::unloaded();
    assert!(!scorer.is_ready());
    assert!(matches!(
        scorer.score("hello"),
        Err(ScoringError::ClassifierUnavailable)
    ));
}

#[test]
fn install_happens_once_and_is_shared_by_clones() {
    let scorer = SentimentScorer::unloaded();
    let handle = scorer.clone();

    scorer
        .install(fixed(SentimentLabel::Negative, 0.5))
        .unwrap();
    assert!(handle.is_ready());
    assert_eq!(handle.score("x").unwrap(), 5.0);

    assert!(matches!(
        scorer.install(fixed(SentimentLabel::Positive, 1.0)),
        Err(ScoringError::ClassifierAlreadyLoaded)
    ));
    assert_eq!(scorer.score("x").unwrap(), 5.0);
}

#[test]
fn out_of_range_confidence_is_rejected() {
    for confidence in [1.5, -0.1, f64::NAN] {
        let scorer = SentimentScorer::loaded(fixed(SentimentLabel::Negative, confidence));
        assert!(matches!(
            scorer.score("x"),
            Err(ScoringError::InvalidConfidence(_))
        ));
    }
}

#[test]
fn lexicon_flags_dismissive_statement_as_negative() {
    let verdict = LexiconClassifier::load()
        .classify("You really should just get it, stop worrying.")
        .unwrap();
    assert_eq!(verdict.label, SentimentLabel::Negative);
    assert_eq!(verdict.confidence, 1.0);
}

#[test]
fn lexicon_reads_supportive_statement_as_positive() {
    let verdict = LexiconClassifier::load()
        .classify("I understand your concerns, and I'm glad you shared them.")
        .unwrap();
    assert_eq!(verdict.label, SentimentLabel::Positive);
    assert!(verdict.confidence > 0.5);
}

#[test]
fn lexicon_negator_flips_the_next_cue() {
    let classifier = LexiconClassifier::load();
    let verdict = classifier.classify("This is not your fault.").unwrap();
    assert_eq!(verdict.label, SentimentLabel::Positive);

    let verdict = classifier.classify("I don\u{2019}t understand why you refuse.").unwrap();
    assert_eq!(verdict.label, SentimentLabel::Negative);
}

#[test]
fn lexicon_without_cues_is_neutral_positive() {
    let verdict = LexiconClassifier::load().classify("").unwrap();
    assert_eq!(
        verdict,
        Classification {
            label: SentimentLabel::Positive,
            confidence: 0.5
        }
    );
}
