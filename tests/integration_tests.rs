use acadcalc::analyzers::cgpa::aggregate_cgpa;
use acadcalc::analyzers::classify::{Level, classify};
use acadcalc::analyzers::sgpa::aggregate_sgpa;
use acadcalc::analyzers::types::CalculationType;
use acadcalc::analyzers::utility::format_points;
use acadcalc::error::CalcError;
use acadcalc::input::{parse_semester_rows, parse_subject_rows};

#[test]
fn test_sgpa_pipeline() {
    let bytes = include_bytes!("fixtures/subjects.csv");
    let rows = parse_subject_rows(&bytes[..]).expect("Failed to parse subjects CSV");
    assert_eq!(rows.len(), 6);

    let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
    let value = aggregate_sgpa(&entries).expect("Expected an SGPA result");

    // Credited pool: A*4 + B+*4 + A+*3 + C*2 = 108 over 13 credits. The
    // graded-but-uncredited row and the no-grade row contribute nothing.
    assert_eq!(format_points(value), "8.31");
    assert_eq!(classify(value), Level::VeryGood);
}

#[test]
fn test_cgpa_pipeline() {
    let bytes = include_bytes!("fixtures/semesters.csv");
    let rows = parse_semester_rows(&bytes[..]).expect("Failed to parse semesters CSV");
    assert_eq!(rows.len(), 4);

    let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
    let aggregate = aggregate_cgpa(&entries).expect("Expected a CGPA result");

    // (8.4*22 + 7.9*24 + 9.1*20) / 66; the blank fourth semester is ignored.
    assert_eq!(aggregate.calculation_type, CalculationType::CreditWeighted);
    assert_eq!(format_points(aggregate.value), "8.43");
    assert_eq!(classify(aggregate.value), Level::VeryGood);
}

#[test]
fn test_cgpa_pipeline_without_credits_falls_back_to_simple_average() {
    let data = "semester,sgpa,credits\nSem 1,8,\nSem 2,6,\n";
    let rows = parse_semester_rows(data.as_bytes()).unwrap();

    let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
    let aggregate = aggregate_cgpa(&entries).unwrap();

    assert_eq!(aggregate.calculation_type, CalculationType::SimpleAverage);
    assert_eq!(format_points(aggregate.value), "7.00");
}

#[test]
fn test_cgpa_pipeline_with_no_usable_rows_is_an_error() {
    let data = "semester,sgpa,credits\nSem 1,,22\nSem 2,abc,\n";
    let rows = parse_semester_rows(data.as_bytes()).unwrap();

    let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
    assert_eq!(aggregate_cgpa(&entries), Err(CalcError::NoValidInput));
}

#[test]
fn test_sgpa_pipeline_ignores_unknown_symbols() {
    let data = "name,grade,credits\nWorkshop,Z,4\nAlgorithms,A,\n";
    let rows = parse_subject_rows(data.as_bytes()).unwrap();

    let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
    // The unknown symbol row is dropped at ingestion; only the unweighted A
    // remains.
    let value = aggregate_sgpa(&entries).unwrap();
    assert_eq!(format_points(value), "9.00");
}

#[test]
fn test_out_of_range_sgpa_is_clamped_at_ingestion() {
    let data = "semester,sgpa,credits\nSem 1,12,\nSem 2,-3,\n";
    let rows = parse_semester_rows(data.as_bytes()).unwrap();

    let entries: Vec<_> = rows.iter().map(|row| row.to_entry()).collect();
    let aggregate = aggregate_cgpa(&entries).unwrap();

    // 12 clamps to 10 and -3 clamps to 0 before aggregation.
    assert_eq!(format_points(aggregate.value), "5.00");
}
