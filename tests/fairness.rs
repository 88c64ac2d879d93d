//! Fairness properties: determinism, tamper evidence, distribution

use std::collections::HashMap;

use ceelo::{commit, derive, resolve, verify, Outcome};

#[test]
fn test_derivation_is_deterministic_across_invocations() {
    for i in 0..1_000u32 {
        let seed = format!("determinism-{}", i).into_bytes();
        assert_eq!(derive(&seed), derive(&seed));
    }
}

#[test]
fn test_commitment_roundtrip_and_rejection() {
    for i in 0..1_000u32 {
        let seed = format!("seed-{}", i).into_bytes();
        let other = format!("seed-{}", i + 1).into_bytes();
        let commitment = commit(&seed);
        assert!(verify(&commitment, &seed));
        assert!(!verify(&commitment, &other));
    }
}

#[test]
fn test_commitment_is_tamper_evident() {
    let seed = b"tamper target";
    let mut commitment = commit(seed);
    assert!(verify(&commitment, seed));

    // Flipping any single bit of the commitment breaks verification
    for byte in 0..commitment.len() {
        commitment[byte] ^= 0x01;
        assert!(!verify(&commitment, seed));
        commitment[byte] ^= 0x01;
    }
}

#[test]
fn test_per_die_distribution_is_uniform() {
    // 60k derivations; each face of each die should land near 1/6. The
    // derivation's residual modulo bias (~2e-19) is far below statistical
    // noise at this sample size, so a 5% tolerance band is comfortable.
    const SAMPLES: u32 = 60_000;
    let mut counts = [[0u32; 6]; 3];

    for i in 0..SAMPLES {
        let dice = derive(&i.to_le_bytes());
        let values = dice.as_array();
        for (die, value) in values.iter().enumerate() {
            counts[die][(*value - 1) as usize] += 1;
        }
    }

    let expected = SAMPLES as f64 / 6.0;
    let tolerance = expected * 0.05;
    for (die, faces) in counts.iter().enumerate() {
        for (face, count) in faces.iter().enumerate() {
            let variance = (*count as f64 - expected).abs();
            assert!(
                variance < tolerance,
                "die {} face {} occurred {} times, expected ~{} (+/-{})",
                die + 1,
                face + 1,
                count,
                expected,
                tolerance
            );
        }
    }
}

#[test]
fn test_dice_are_not_trivially_correlated() {
    // Derived from non-overlapping digest slices: the three dice of one
    // roll must not all track each other across seeds
    let mut all_equal = 0u32;
    const SAMPLES: u32 = 10_000;
    for i in 0..SAMPLES {
        let dice = derive(&format!("corr-{}", i).into_bytes());
        if dice.is_triple() {
            all_equal += 1;
        }
    }
    // Independent dice produce triples at 1/36; allow a wide band
    let expected = SAMPLES as f64 / 36.0;
    assert!(
        (all_equal as f64) < expected * 2.0,
        "triples occurred {} times, expected ~{}",
        all_equal,
        expected
    );
    assert!(all_equal > 0, "no triples at all in {} samples", SAMPLES);
}

#[test]
fn test_outcome_frequencies_match_rule_structure() {
    // Sanity check the resolver over derived rolls: every category shows
    // up, and rerolls dominate (most hands are no-hands in Cee-Lo)
    let mut by_category: HashMap<&'static str, u32> = HashMap::new();
    for i in 0..20_000u32 {
        let outcome = resolve(derive(&i.to_be_bytes())).unwrap();
        let key = match outcome {
            Outcome::Win { .. } => "win",
            Outcome::Lose => "lose",
            Outcome::Point { .. } => "point",
            Outcome::Reroll => "reroll",
        };
        *by_category.entry(key).or_insert(0) += 1;
    }

    for key in ["win", "lose", "point", "reroll"] {
        assert!(
            by_category.get(key).copied().unwrap_or(0) > 0,
            "category {} never occurred",
            key
        );
    }
    assert!(by_category["reroll"] > by_category["win"]);
    assert!(by_category["point"] > by_category["lose"]);
}
