use super::*;
use crate::aspect::AspectType;
use crate::bodies::Body;

#[test]
fn test_default_config_is_valid() {
    assert!(SeismographConfig::default().validate().is_ok());
}

#[test]
fn test_strict_preset_is_valid_and_tighter() {
    let strict = SeismographConfig::strict();
    assert!(strict.validate().is_ok());
    let standard = SeismographConfig::standard();
    assert!(strict.orbs.conjunction < standard.orbs.conjunction);
    assert!(strict.orbs.moon_bonus < standard.orbs.moon_bonus);
}

#[test]
fn test_effective_cap_uses_min_of_aspect_and_max_class() {
    let orbs = OrbConfig::default();
    // Sextile cap 5.0 beats the luminary class cap 8.0.
    let cap = orbs.effective_cap(&AspectType::Sextile, &Body::Venus, &Body::Sun);
    assert_eq!(cap, 5.0);
    // Point-to-point conjunction limited by class cap, not the 8.0 aspect cap.
    let cap = orbs.effective_cap(&AspectType::Conjunction, &Body::MeanNode, &Body::Chiron);
    assert_eq!(cap, 5.0);
}

#[test]
fn test_effective_cap_moon_bonus() {
    let orbs = OrbConfig::default();
    let without = orbs.effective_cap(&AspectType::Trine, &Body::Venus, &Body::Sun);
    let with = orbs.effective_cap(&AspectType::Trine, &Body::Moon, &Body::Venus);
    assert_eq!(with, without + orbs.moon_bonus);
}

#[test]
fn test_effective_cap_outer_to_personal_penalty() {
    let orbs = OrbConfig::default();
    // Saturn square Mercury: aspect cap 7.0, minus 1.0 penalty.
    let cap = orbs.effective_cap(&AspectType::Square, &Body::Saturn, &Body::Mercury);
    assert_eq!(cap, 6.0);
}

#[test]
fn test_effective_cap_respects_bounds() {
    let orbs = OrbConfig {
        quintile: 0.5,
        outer_to_personal_penalty: -2.0,
        ..Default::default()
    };
    let cap = orbs.effective_cap(&AspectType::Quintile, &Body::Pluto, &Body::Mars);
    assert_eq!(cap, orbs.min_cap);
}

#[test]
fn test_invalid_orb_config_rejected() {
    let mut orbs = OrbConfig::default();
    orbs.square = 0.0;
    assert!(orbs.validate().is_err());

    let mut orbs = OrbConfig::default();
    orbs.outer_to_personal_penalty = 1.0;
    assert!(orbs.validate().is_err());
}

#[test]
fn test_invalid_normalizer_rejected() {
    let mut normalizer = NormalizerConfig::default();
    normalizer.window_size = 1;
    assert!(normalizer.validate().is_err());

    let mut normalizer = NormalizerConfig::default();
    normalizer.prior_divisor = 0.0;
    assert!(normalizer.validate().is_err());
}

#[test]
fn test_invalid_sfd_rejected() {
    let mut sfd = SfdConfig::default();
    sfd.locality_dampening = 1.5;
    assert!(sfd.validate().is_err());
}

#[test]
fn test_invalid_hook_limits_rejected() {
    let mut hooks = HookConfig::default();
    hooks.solo = HookLimits { min: 6, max: 3 };
    assert!(hooks.validate().is_err());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SeismographConfig::strict();
    let json = serde_json::to_string(&config).unwrap();
    let back: SeismographConfig = serde_json::from_str(&json).unwrap();
    assert!(back.validate().is_ok());
    assert_eq!(back.orbs.conjunction, config.orbs.conjunction);
}

#[test]
fn test_partial_config_json_uses_defaults() {
    let back: SeismographConfig =
        serde_json::from_str(r#"{"normalizer": {"window_size": 7, "prior_divisor": 2.0,
            "reference_scale": 1.6, "magnitude_exponent": 1.3, "bias_input_gain": 3.0,
            "bias_input_exponent": 1.8, "bias_output_gain": 3.2, "bias_amplify_base": 0.8,
            "bias_amplify_slope": 0.4, "bias_divisor": 50.0}}"#)
            .unwrap();
    assert_eq!(back.normalizer.window_size, 7);
    assert_eq!(back.orbs.conjunction, OrbConfig::default().conjunction);
}
