use super::*;

#[test]
fn decimal_input_filter() {
    for ok in ["", "3", "3.", ".5", "12.75", "007"] {
        assert!(is_decimal_input(ok), "{ok:?} should be accepted");
    }
    for bad in ["-1", "1.2.3", "1e3", "abc", "1,5", " 2"] {
        assert!(!is_decimal_input(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn estimate_waits_for_both_inputs() {
    assert_eq!(estimate("", ""), Estimate::Pending);
    assert_eq!(estimate("3", ""), Estimate::Pending);
}

#[test]
fn estimate_multiplies_area_by_base_price() {
    assert_eq!(estimate("3", "2.5"), Estimate::Price(11_250.0));
    assert_eq!(estimate("4.", "1"), Estimate::Price(6_000.0));
}

#[test]
fn non_positive_or_bare_dot_is_invalid() {
    assert_eq!(estimate("0", "2"), Estimate::Invalid);
    assert_eq!(estimate("2", "0.0"), Estimate::Invalid);
    assert_eq!(estimate(".", "2"), Estimate::Invalid);
}

#[test]
fn rejected_keystroke_keeps_previous_value() {
    let mut inputs = EstimatorInputs::default();
    assert!(inputs.set_width("2.5".to_owned()));
    assert!(!inputs.set_width("2.5a".to_owned()));
    assert_eq!(inputs.width, "2.5");
    assert!(inputs.set_height("4".to_owned()));
    assert_eq!(inputs.estimate(), Estimate::Price(15_000.0));
}
