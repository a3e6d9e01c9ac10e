use crate::analyzers::types::{CalculationType, CgpaAggregate, SemesterEntry};
use crate::analyzers::utility::round2;
use crate::error::CalcError;

/// Reduces semester rows to a cumulative grade-point average.
///
/// Rows whose SGPA is missing or outside [0, 10] are ignored. Rows carrying a
/// positive credit value accumulate a credit-weighted sum; the rest a plain
/// sum. As with the semester average, a non-empty credited pool wins outright
/// and the uncredited pool is dropped.
///
/// # Errors
///
/// Returns [`CalcError::NoValidInput`] when no row yields a usable SGPA.
pub fn aggregate_cgpa(semesters: &[SemesterEntry]) -> Result<CgpaAggregate, CalcError> {
    let mut total_credits = 0.0;
    let mut total_grade_points = 0.0;
    let mut has_credits = false;
    let mut sgpa_sum = 0.0;
    let mut sgpa_count = 0usize;

    for semester in semesters {
        let Some(sgpa) = semester.sgpa else {
            continue;
        };
        // Entry-time clamping keeps values in range; this guard also rejects NaN.
        if !(0.0..=10.0).contains(&sgpa) {
            continue;
        }

        match semester.credits {
            Some(credits) if credits > 0.0 && credits.is_finite() => {
                has_credits = true;
                total_credits += credits;
                total_grade_points += sgpa * credits;
            }
            _ => {
                sgpa_sum += sgpa;
                sgpa_count += 1;
            }
        }
    }

    if has_credits && total_credits > 0.0 {
        Ok(CgpaAggregate {
            value: round2(total_grade_points / total_credits),
            calculation_type: CalculationType::CreditWeighted,
        })
    } else if sgpa_count > 0 {
        Ok(CgpaAggregate {
            value: round2(sgpa_sum / sgpa_count as f64),
            calculation_type: CalculationType::SimpleAverage,
        })
    } else {
        Err(CalcError::NoValidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::utility::format_points;

    fn entry(sgpa: Option<f64>, credits: Option<f64>) -> SemesterEntry {
        SemesterEntry {
            semester: String::new(),
            sgpa,
            credits,
        }
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = aggregate_cgpa(&[]).unwrap_err();
        assert_eq!(err, CalcError::NoValidInput);
        assert_eq!(
            err.to_string(),
            "Please enter valid SGPA for at least one semester"
        );
    }

    #[test]
    fn test_rows_without_sgpa_are_an_error() {
        let semesters = [entry(None, Some(4.0)), entry(None, None)];
        assert_eq!(aggregate_cgpa(&semesters), Err(CalcError::NoValidInput));
    }

    #[test]
    fn test_simple_average() {
        let semesters = [entry(Some(8.0), None), entry(Some(6.0), None)];
        let aggregate = aggregate_cgpa(&semesters).unwrap();
        assert_eq!(aggregate.calculation_type, CalculationType::SimpleAverage);
        assert_eq!(format_points(aggregate.value), "7.00");
    }

    #[test]
    fn test_credit_weighted() {
        let semesters = [entry(Some(8.0), Some(4.0)), entry(Some(6.0), Some(2.0))];
        let aggregate = aggregate_cgpa(&semesters).unwrap();
        assert_eq!(aggregate.calculation_type, CalculationType::CreditWeighted);
        // (8*4 + 6*2) / 6
        assert_eq!(format_points(aggregate.value), "7.33");
    }

    #[test]
    fn test_credited_pool_drops_uncredited_semesters() {
        let semesters = [entry(Some(6.0), Some(2.0)), entry(Some(10.0), None)];
        let aggregate = aggregate_cgpa(&semesters).unwrap();
        assert_eq!(aggregate.calculation_type, CalculationType::CreditWeighted);
        assert_eq!(format_points(aggregate.value), "6.00");
    }

    #[test]
    fn test_out_of_range_sgpa_is_ignored() {
        // Defensive: entry-time clamping should make these unreachable.
        let semesters = [entry(Some(11.0), None), entry(Some(-0.5), None)];
        assert_eq!(aggregate_cgpa(&semesters), Err(CalcError::NoValidInput));

        let semesters = [entry(Some(f64::NAN), None), entry(Some(7.0), None)];
        let aggregate = aggregate_cgpa(&semesters).unwrap();
        assert_eq!(format_points(aggregate.value), "7.00");
    }

    #[test]
    fn test_non_positive_credits_fall_back_to_simple_average() {
        let semesters = [entry(Some(8.0), Some(0.0)), entry(Some(6.0), Some(-2.0))];
        let aggregate = aggregate_cgpa(&semesters).unwrap();
        assert_eq!(aggregate.calculation_type, CalculationType::SimpleAverage);
        assert_eq!(format_points(aggregate.value), "7.00");
    }

    #[test]
    fn test_boundary_sgpa_values_are_valid() {
        let semesters = [entry(Some(0.0), None), entry(Some(10.0), None)];
        let aggregate = aggregate_cgpa(&semesters).unwrap();
        assert_eq!(format_points(aggregate.value), "5.00");
    }

    #[test]
    fn test_idempotence() {
        let semesters = [entry(Some(8.25), Some(22.0)), entry(Some(7.5), Some(24.0))];
        assert_eq!(aggregate_cgpa(&semesters), aggregate_cgpa(&semesters));
    }
}
