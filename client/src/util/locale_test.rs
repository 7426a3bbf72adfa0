#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn format_score_uses_en_us_rules_outside_browser() {
    assert_eq!(format_score(0.1), "0.1");
    assert_eq!(format_score(1234.5678), "1,234.568");
}
