use chrono::{Days, NaiveDate};

/// Number of consecutive check-in days ending at `today`.
///
/// A streak still counts when the latest check-in was yesterday, so an
/// athlete does not lose it before getting a chance to check in today.
/// `dates` may be unsorted and contain duplicates.
pub fn compute_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = dates.iter().copied().filter(|d| *d <= today).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&latest) = days.first() else {
        return 0;
    };

    let yesterday = today.checked_sub_days(Days::new(1));
    if latest != today && Some(latest) != yesterday {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        if pair[0].checked_sub_days(Days::new(1)) == Some(pair[1]) {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
