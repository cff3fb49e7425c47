use super::*;

#[test]
fn groups_integer_part() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1000.0), "1,000");
    assert_eq!(group_thousands(11_250.0), "11,250");
    assert_eq!(group_thousands(1_234_567.0), "1,234,567");
}

#[test]
fn keeps_significant_decimals() {
    assert_eq!(group_thousands(1234.5), "1,234.5");
    assert_eq!(group_thousands(1234.567), "1,234.57");
    assert_eq!(group_thousands(10.004), "10");
}

#[test]
fn negative_and_non_finite() {
    assert_eq!(group_thousands(-1500.0), "-1,500");
    assert_eq!(group_thousands(-0.001), "0");
    assert_eq!(group_thousands(f64::NAN), "0");
}

#[test]
fn egp_suffix() {
    assert_eq!(egp(6000.0), "6,000 EGP");
}
