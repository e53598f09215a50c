use super::*;
use crate::error::{AngleError, FormatIssue};
use proptest::prelude::*;

fn issue_of(text: &str) -> FormatIssue {
    match parse_dms(text) {
        Err(AngleError::Format { issue, .. }) => issue,
        other => panic!("expected format error for {text:?}, got {other:?}"),
    }
}

#[test]
fn parses_colon_space_and_mixed_separators() {
    let want = Angle::new(235, 20, 25).unwrap();
    assert_eq!(parse_dms("235:20:25").unwrap(), want);
    assert_eq!(parse_dms("235 20 25").unwrap(), want);
    assert_eq!(parse_dms("  235:20 25 ").unwrap(), want);
    assert_eq!(parse_dms("235::20\t25").unwrap(), want);
    assert_eq!("235:20:25".parse::<Angle>().unwrap(), want);
}

#[test]
fn rejects_out_of_range_components() {
    assert_eq!(issue_of("235:60:00"), FormatIssue::MinutesOutOfRange(60));
    assert_eq!(issue_of("10:0:60"), FormatIssue::SecondsOutOfRange(60));
    assert_eq!(issue_of("-1:0:0"), FormatIssue::Negative);
    assert_eq!(issue_of("1:-5:0"), FormatIssue::Negative);
}

#[test]
fn degrees_have_no_upper_bound() {
    let a = parse_dms("2000000000:0:0").unwrap();
    assert_eq!(a.degrees(), 2_000_000_000);
    assert_eq!(to_seconds(a), 7_200_000_000_000);

    let top = parse_dms(&format!("{}:59:59", i64::MAX)).unwrap();
    assert_eq!(to_seconds(top), i128::from(i64::MAX) * 3600 + 3599);
    assert_eq!(from_whole_seconds(to_seconds(top)), top);
    // Past i64 the text is no longer an integer we can hold.
    assert!(matches!(
        issue_of("9223372036854775808:0:0"),
        FormatIssue::NotInteger(_)
    ));
}

#[test]
fn rejects_malformed_text() {
    assert_eq!(issue_of(""), FormatIssue::Empty);
    assert_eq!(issue_of("   "), FormatIssue::Empty);
    assert_eq!(issue_of("1:2"), FormatIssue::TokenCount(2));
    assert_eq!(issue_of("1 2 3 4"), FormatIssue::TokenCount(4));
    // Dangling separator leaves an empty fourth component.
    assert_eq!(issue_of("1:2:3:"), FormatIssue::TokenCount(4));
    assert_eq!(issue_of("1:2.5:3"), FormatIssue::NotInteger("2.5".into()));
    assert_eq!(issue_of("a b c"), FormatIssue::NotInteger("a".into()));
}

#[test]
fn field_parsing_reports_one_based_index() {
    let ok = parse_angle_fields(["90:0:0", "90 0 0", "180:0:0"]).unwrap();
    assert_eq!(ok.len(), 3);
    let err = parse_angle_fields(vec!["90:0:0".to_string(), "".to_string()]).unwrap_err();
    assert_eq!(err.field_index(), Some(2));
    match err {
        AngleError::Field { source, .. } => assert!(matches!(
            *source,
            AngleError::Format {
                issue: FormatIssue::Empty,
                ..
            }
        )),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn seconds_conversion_examples() {
    let a = Angle::new(235, 20, 25).unwrap();
    assert_eq!(to_seconds(a), 235 * 3600 + 20 * 60 + 25);
    assert_eq!(from_seconds(847_225.0), a);
    // Single rounding point, ties to even.
    assert_eq!(from_seconds(59.5), Angle::new(0, 1, 0).unwrap());
    assert_eq!(from_seconds(58.5), Angle::new(0, 0, 58).unwrap());
    assert_eq!(from_seconds(3599.6), Angle::new(1, 0, 0).unwrap());
}

#[test]
fn negative_totals_decompose_with_floor_division() {
    let a = from_seconds(-1.0);
    assert_eq!(a.as_tuple(), (-1, 59, 59));
    assert_eq!(to_seconds(a), -1);
    assert!(!a.is_well_formed());
    assert_eq!(from_whole_seconds(-3600).as_tuple(), (-1, 0, 0));
}

#[test]
fn expected_sums() {
    assert_eq!(expected_sum_degrees(3), 180);
    assert_eq!(expected_sum_degrees(4), 360);
    assert_eq!(expected_sum_degrees(7), 900);
}

#[test]
fn display_and_decimal() {
    let a = Angle::new(45, 30, 36).unwrap();
    assert_eq!(a.to_string(), "45°30'36\"");
    assert_eq!(format!("{a:#}"), "45:30:36");
    assert!((a.to_decimal_degrees() - 45.51).abs() < 1e-12);
    assert!(Angle::new(10, 0, 0).unwrap() > Angle::new(9, 59, 59).unwrap());
}

proptest! {
    #[test]
    fn round_trip_whole_seconds(total in 0i128..2_000_000_000) {
        let a = from_seconds(total as f64);
        prop_assert_eq!(to_seconds(a), total);
        prop_assert!(a.is_well_formed());
    }

    #[test]
    fn round_trip_rounds_fractional_seconds(total in 0.0f64..1.0e9) {
        prop_assert_eq!(to_seconds(from_seconds(total)) as f64, total.round_ties_even());
    }

    #[test]
    fn negative_totals_never_panic_and_stay_consistent(total in -1_000_000_000i128..0) {
        let a = from_whole_seconds(total);
        prop_assert_eq!(to_seconds(a), total);
        prop_assert!((0..60).contains(&a.minutes()));
        prop_assert!((0..60).contains(&a.seconds()));
    }

    #[test]
    fn display_alternate_parses_back(d in 0i64..1000, m in 0i64..60, s in 0i64..60) {
        let a = Angle::new(d, m, s).unwrap();
        prop_assert_eq!(parse_dms(&format!("{a:#}")).unwrap(), a);
    }
}
