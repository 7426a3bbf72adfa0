use super::*;

fn assert_values_match_variants<T: Domain + std::fmt::Debug + PartialEq>() {
    assert_eq!(T::ALL.len(), T::VALUES.len());
    for (variant, value) in T::ALL.iter().zip(T::VALUES) {
        assert_eq!(variant.as_str(), *value);
        assert_eq!(T::parse(value), Some(*variant));
    }
}

// =============================================================
// Domain enums
// =============================================================

#[test]
fn domain_values_match_variants() {
    assert_values_match_variants::<AttackComplexity>();
    assert_values_match_variants::<AttackVector>();
    assert_values_match_variants::<Impact>();
    assert_values_match_variants::<PrivilegesRequired>();
    assert_values_match_variants::<Scope>();
    assert_values_match_variants::<UserInteraction>();
}

#[test]
fn domain_defaults_are_first_options() {
    assert_eq!(AttackComplexity::default(), AttackComplexity::Low);
    assert_eq!(AttackVector::default(), AttackVector::Network);
    assert_eq!(Impact::default(), Impact::None);
    assert_eq!(PrivilegesRequired::default(), PrivilegesRequired::None);
    assert_eq!(Scope::default(), Scope::Unchanged);
    assert_eq!(UserInteraction::default(), UserInteraction::None);
}

#[test]
fn parse_rejects_values_outside_domain() {
    assert_eq!(AttackVector::parse("network"), None);
    assert_eq!(AttackVector::parse("ADJACENT"), None);
    assert_eq!(Scope::parse(""), None);
    assert_eq!(UserInteraction::parse("LOW"), None);
}

#[test]
fn serde_uses_screaming_snake_case() {
    let json = serde_json::to_string(&AttackVector::AdjacentNetwork).unwrap();
    assert_eq!(json, "\"ADJACENT_NETWORK\"");
    let back: AttackVector = serde_json::from_str("\"PHYSICAL\"").unwrap();
    assert_eq!(back, AttackVector::Physical);
}

// =============================================================
// Attribute
// =============================================================

#[test]
fn form_order_is_a_permutation_of_natural_order() {
    let mut form = Attribute::FORM_ORDER.to_vec();
    form.sort();
    assert_eq!(form, Attribute::ALL.to_vec());
}

#[test]
fn natural_order_is_sorted_by_wire_name() {
    let names: Vec<_> = Attribute::ALL.iter().map(|a| a.wire_name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn form_order_starts_with_attack_vector() {
    assert_eq!(Attribute::FORM_ORDER[0], Attribute::AttackVector);
    assert_eq!(Attribute::FORM_ORDER[7], Attribute::AvailabilityImpact);
}

#[test]
fn wire_name_lookup_round_trips() {
    for attribute in Attribute::ALL {
        assert_eq!(Attribute::from_wire_name(attribute.wire_name()), Some(attribute));
    }
    assert_eq!(Attribute::from_wire_name("attack_vector"), None);
}

#[test]
fn impacts_share_one_domain() {
    assert_eq!(Attribute::ConfidentialityImpact.values(), &["NONE", "LOW", "HIGH"]);
    assert_eq!(Attribute::IntegrityImpact.values(), Attribute::AvailabilityImpact.values());
}

#[test]
fn labels_are_human_readable() {
    assert_eq!(Attribute::AttackVector.label(), "Attack vector");
    assert_eq!(Attribute::PrivilegesRequired.label(), "Privileges required");
    assert_eq!(Attribute::Scope.to_string(), "scope");
}
