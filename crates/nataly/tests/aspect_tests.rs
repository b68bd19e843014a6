use nataly::aspects::{
    angular_difference, AspectCalculator, AspectKind, AspectSettings, MatchPolicy, OrbConfig,
};
use nataly::bodies::Body;

const CUSPS: [f64; 12] = [
    0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
];

fn body(name: &str, lon: f64, speed: f64) -> Body {
    Body::new(name, lon, speed, &CUSPS)
}

#[test]
fn test_trine_at_exact_angle() {
    let calculator = AspectCalculator::new();
    let mars = body("Mars", 10.0, 0.6);
    let jupiter = body("Jupiter", 130.0, 0.1);

    let aspect = calculator
        .calculate_aspect(&mars, &jupiter, &AspectSettings::default())
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Trine);
    assert_eq!(aspect.symbol, "△");
    assert!(aspect.deviation() < 1e-9);
    assert!(aspect.in_orb);
    assert_eq!(aspect.max_orb, 6.0);
}

#[test]
fn test_conjunction_near_zero() {
    let calculator = AspectCalculator::new();
    let venus = body("Venus", 10.0, 1.2);
    let mercury = body("Mercury", 10.00001, 1.5);

    let aspect = calculator
        .calculate_aspect(&venus, &mercury, &AspectSettings::default())
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!(aspect.deviation() < 1e-4);
}

#[test]
fn test_no_self_aspects_or_duplicates() {
    let calculator = AspectCalculator::new();
    let bodies = vec![
        body("Sun", 10.0, 1.0),
        body("Moon", 130.0, 13.0),
        body("Mars", 250.0, 0.5),
        body("Saturn", 100.0, 0.05),
    ];
    let refs: Vec<&Body> = bodies.iter().collect();

    let aspects = calculator.compute_chart_aspects(&refs, &AspectSettings::default());
    // Nearest policy reports every unordered pair once
    assert_eq!(aspects.len(), 6);
    for aspect in &aspects {
        assert_ne!(aspect.first.name, aspect.second.name);
    }
    let mut pairs: Vec<(String, String)> = aspects
        .iter()
        .map(|a| {
            let mut pair = [a.first.name.clone(), a.second.name.clone()];
            pair.sort();
            (pair[0].clone(), pair[1].clone())
        })
        .collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), 6);
}

#[test]
fn test_cross_collections_skip_shared_names() {
    let calculator = AspectCalculator::new();
    let natal = vec![body("Sun", 10.0, 1.0), body("Moon", 100.0, 13.0)];
    let transit = vec![body("Sun", 12.0, 1.0), body("Mars", 190.0, 0.7)];
    let natal_refs: Vec<&Body> = natal.iter().collect();
    let transit_refs: Vec<&Body> = transit.iter().collect();

    let aspects =
        calculator.compute_aspects(&natal_refs, &transit_refs, &AspectSettings::default());
    let names: Vec<(&str, &str)> = aspects
        .iter()
        .map(|a| (a.first.name.as_str(), a.second.name.as_str()))
        .collect();
    // Pairs are keyed by name: Sun-Sun is skipped
    assert_eq!(names, vec![("Sun", "Mars"), ("Moon", "Sun"), ("Moon", "Mars")]);
}

#[test]
fn test_applying_when_faster_body_closes_in() {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings::default();
    let sun = body("Sun", 100.0, 0.5);

    let approaching = body("Moon", 95.0, 1.0);
    let aspect = calculator.calculate_aspect(&approaching, &sun, &settings).unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!(aspect.is_applying);
    assert!((aspect.orb - 5.0).abs() < 1e-9);
    assert_eq!(aspect.phase(), "Applying");

    let leaving = body("Moon", 105.0, 1.0);
    let aspect = calculator.calculate_aspect(&leaving, &sun, &settings).unwrap();
    assert!(!aspect.is_applying);
    assert!((aspect.orb + 5.0).abs() < 1e-9);
    assert_eq!(aspect.orb_str(), "5°00'");
}

#[test]
fn test_only_major_and_include_objects() {
    let calculator = AspectCalculator::new();
    let mars = body("Mars", 0.0, 0.6);
    let saturn = body("Saturn", 150.0, 0.05);
    let pluto = body("Pluto", 200.0, 0.01);
    let refs = vec![&mars, &saturn, &pluto];

    let majors_only = AspectSettings::default().only_major(true);
    let aspect = calculator.calculate_aspect(&mars, &saturn, &majors_only).unwrap();
    assert!(aspect.kind.is_major());

    let restricted = AspectSettings::default().with_objects(&["Mars", "Saturn"]);
    let aspects = calculator.compute_chart_aspects(&refs, &restricted);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Quincunx);
}

#[test]
fn test_in_orb_policy_picks_smallest_deviation() {
    let calculator = AspectCalculator::new();
    // Luminary orbs: opposition 10, quincunx 3
    let settings = AspectSettings::new(OrbConfig::placidus()).with_policy(MatchPolicy::InOrb);
    let sun = body("Sun", 0.0, 1.0);
    let neptune = body("Neptune", 152.0, 0.01);

    let aspect = calculator.calculate_aspect(&sun, &neptune, &settings).unwrap();
    assert_eq!(aspect.kind, AspectKind::Quincunx);
    assert!(aspect.in_orb);

    let far = body("Uranus", 100.0, 0.02);
    assert!(calculator.calculate_aspect(&sun, &far, &settings).is_none());
}

#[test]
fn test_angular_difference_symmetry() {
    for (a, b) in [(0.0, 359.0), (45.0, 300.0), (180.0, 0.0), (12.5, 12.5)] {
        let d = angular_difference(a, b);
        assert!((0.0..=180.0).contains(&d));
        assert_eq!(d, angular_difference(b, a));
    }
}

#[test]
fn test_transit_sun_uses_luminary_orbs() {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings::default().with_policy(MatchPolicy::InOrb);
    let mars = body("Mars", 212.1, 0.7);
    let transit_sun = body("T-Sun", 203.1, 0.99);
    assert_eq!(transit_sun.kind, nataly::bodies::BodyKind::Luminary);

    let aspect = calculator.calculate_aspect(&mars, &transit_sun, &settings).unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert_eq!(aspect.max_orb, 10.0);

    let natal_sun = body("Sun", 203.1, 0.99);
    let natal = calculator.calculate_aspect(&mars, &natal_sun, &settings).unwrap();
    assert_eq!(natal.max_orb, aspect.max_orb);
}
