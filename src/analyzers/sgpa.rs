use crate::analyzers::types::GradeEntry;
use crate::analyzers::utility::round2;

/// Reduces subject rows to a semester grade-point average, rounded to two
/// decimal places.
///
/// Rows without a selected grade are ignored. The remaining rows split into
/// two accounting pools: rows carrying a positive credit value accumulate a
/// credit-weighted sum, all others an unweighted sum. When the credited pool
/// is non-empty it alone decides the average and the unweighted pool is
/// dropped entirely. Returns `None` when no row carries a grade.
pub fn aggregate_sgpa(subjects: &[GradeEntry]) -> Option<f64> {
    let mut total_credits = 0.0;
    let mut weighted_points = 0.0;
    let mut unweighted_points = 0.0;
    let mut unweighted_count = 0usize;
    let mut valid_subjects = 0usize;

    for subject in subjects {
        let Some(grade) = subject.grade else {
            continue;
        };
        valid_subjects += 1;

        match subject.credits {
            Some(credits) if credits > 0.0 && credits.is_finite() => {
                total_credits += credits;
                weighted_points += grade.points() * credits;
            }
            _ => {
                unweighted_points += grade.points();
                unweighted_count += 1;
            }
        }
    }

    if valid_subjects == 0 {
        return None;
    }

    let sgpa = if total_credits > 0.0 {
        weighted_points / total_credits
    } else {
        unweighted_points / unweighted_count as f64
    };

    Some(round2(sgpa))
}
