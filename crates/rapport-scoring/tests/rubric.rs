use rapport_core::models::rubric::{
    ANXIETY_STRESS_RANGE, EMPATHY_RAPPORT_RANGE, OVERALL_NEGATIVITY_RANGE,
    PERCEIVED_JUDGMENT_RANGE,
};
use rapport_scoring::error::ScoringError;
use rapport_scoring::noise::{FixedNoise, NoiseSource, NormalNoise, ZeroNoise};
use rapport_scoring::rubric::synthesize;

#[test]
fn zero_noise_follows_the_mean_formulas() {
    let result = synthesize(8.0, &ZeroNoise).unwrap();
    assert_eq!(result.overall_negativity, 8.0);
    assert_eq!(result.perceived_judgment, 4.0);
    assert_eq!(result.anxiety_stress, 4.0);
    assert_eq!(result.empathy_rapport, 1.0);
}

#[test]
fn rationale_uses_one_decimal() {
    let result = synthesize(0.0, &ZeroNoise).unwrap();
    assert_eq!(
        result.rationale,
        "Based on sentiment analysis and case-specific guidelines, the statement shows an overall negativity of 0.0/10. \
         The perceived judgment is 0.0/5, potential for anxiety/stress is 0.0/5, \
         and empathy/rapport building is 5.0 on a scale from -5 to +5."
    );
}

#[test]
fn extreme_draws_are_clamped() {
    for z in [-1e9, -12.0, 12.0, 1e9, f64::INFINITY, f64::NEG_INFINITY] {
        for sentiment in [0.0, 2.5, 5.0, 10.0] {
            let result = synthesize(sentiment, &FixedNoise(z)).unwrap();
            assert!(OVERALL_NEGATIVITY_RANGE.contains(result.overall_negativity));
            assert!(PERCEIVED_JUDGMENT_RANGE.contains(result.perceived_judgment));
            assert!(ANXIETY_STRESS_RANGE.contains(result.anxiety_stress));
            assert!(EMPATHY_RAPPORT_RANGE.contains(result.empathy_rapport));
        }
    }
}

#[test]
fn large_positive_draw_hits_the_upper_bounds() {
    let result = synthesize(10.0, &FixedNoise(100.0)).unwrap();
    assert_eq!(result.overall_negativity, 10.0);
    assert_eq!(result.perceived_judgment, 5.0);
    assert_eq!(result.anxiety_stress, 5.0);
    assert_eq!(result.empathy_rapport, 5.0);
}

#[test]
fn normal_noise_stays_in_range() {
    for _ in 0..500 {
        let result = synthesize(9.0, &NormalNoise).unwrap();
        assert!(OVERALL_NEGATIVITY_RANGE.contains(result.overall_negativity));
        assert!(PERCEIVED_JUDGMENT_RANGE.contains(result.perceived_judgment));
        assert!(ANXIETY_STRESS_RANGE.contains(result.anxiety_stress));
        assert!(EMPATHY_RAPPORT_RANGE.contains(result.empathy_rapport));
    }
}

#[test]
fn fixed_noise_scales_with_sigma() {
    assert_eq!(FixedNoise(2.0).sample(0.5), 1.0);
    assert_eq!(ZeroNoise.sample(3.0), 0.0);
}

#[test]
fn non_finite_sentiment_is_rejected() {
    assert!(matches!(
        synthesize(f64::NAN, &ZeroNoise),
        Err(ScoringError::NonFiniteSentiment(_))
    ));
}
