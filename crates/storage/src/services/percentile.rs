use std::cmp::Ordering;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::TestType;

/// Best result of one athlete for one test type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestResult {
    pub athlete_id: Uuid,
    pub test_type: TestType,
    pub result: Decimal,
}

impl BestResult {
    /// How this result compares to `other`, `Greater` meaning it is the better one
    fn rank_against(&self, other: &BestResult) -> Ordering {
        let ordering = self.result.cmp(&other.result);
        if self.test_type.lower_is_better() {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Percentile (0-100) of `athlete_id` among the athletes in `bests`.
///
/// For every test type the athlete has, its percent rank is the share of the
/// other athletes with a strictly worse best result. Ties share a rank and a
/// type nobody else has ranks 0. The per-type ranks are averaged; an athlete
/// without results gets 0.
pub fn percentile(athlete_id: Uuid, bests: &[BestResult]) -> f64 {
    let ranks: Vec<f64> = bests
        .iter()
        .filter(|b| b.athlete_id == athlete_id)
        .map(|own| {
            let same_type = bests.iter().filter(|b| b.test_type == own.test_type);
            let (others, worse) = same_type.fold((0usize, 0usize), |(others, worse), b| {
                if b.athlete_id == athlete_id {
                    (others, worse)
                } else if own.rank_against(b) == Ordering::Greater {
                    (others + 1, worse + 1)
                } else {
                    (others + 1, worse)
                }
            });

            if others == 0 {
                0.0
            } else {
                worse as f64 / others as f64
            }
        })
        .collect();

    if ranks.is_empty() {
        return 0.0;
    }

    ranks.iter().sum::<f64>() / ranks.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(athlete: u128, test_type: TestType, result: &str) -> BestResult {
        BestResult {
            athlete_id: Uuid::from_u128(athlete),
            test_type,
            result: result.parse::<Decimal>().unwrap(),
        }
    }

    fn id(athlete: u128) -> Uuid {
        Uuid::from_u128(athlete)
    }

    #[test]
    fn test_no_results_is_zero() {
        let bests = vec![best(2, TestType::Shooting, "8")];
        assert_eq!(percentile(id(1), &bests), 0.0);
        assert_eq!(percentile(id(1), &[]), 0.0);
    }

    #[test]
    fn test_alone_in_a_test_type_is_zero() {
        let bests = vec![best(1, TestType::VerticalJump, "45")];
        assert_eq!(percentile(id(1), &bests), 0.0);
    }

    #[test]
    fn test_speed_is_lower_is_better() {
        let bests = vec![
            best(1, TestType::Speed20m, "2.90"),
            best(2, TestType::Speed20m, "3.10"),
            best(3, TestType::Speed20m, "3.40"),
        ];
        assert_eq!(percentile(id(1), &bests), 100.0);
        assert_eq!(percentile(id(2), &bests), 50.0);
        assert_eq!(percentile(id(3), &bests), 0.0);
    }

    #[test]
    fn test_agility_is_lower_is_better() {
        let bests = vec![
            best(1, TestType::Agility505, "2.2"),
            best(2, TestType::Agility505, "2.6"),
        ];
        assert_eq!(percentile(id(1), &bests), 100.0);
        assert_eq!(percentile(id(2), &bests), 0.0);
    }

    #[test]
    fn test_jump_is_higher_is_better() {
        let bests = vec![
            best(1, TestType::VerticalJump, "52"),
            best(2, TestType::VerticalJump, "40"),
        ];
        assert_eq!(percentile(id(1), &bests), 100.0);
        assert_eq!(percentile(id(2), &bests), 0.0);
    }

    #[test]
    fn test_ties_share_a_rank() {
        let bests = vec![
            best(1, TestType::Shooting, "7"),
            best(2, TestType::Shooting, "7"),
            best(3, TestType::Shooting, "5"),
        ];
        assert_eq!(percentile(id(1), &bests), 50.0);
        assert_eq!(percentile(id(2), &bests), 50.0);
    }

    #[test]
    fn test_ranks_average_across_test_types() {
        let bests = vec![
            best(1, TestType::Speed20m, "3.0"),
            best(2, TestType::Speed20m, "3.5"),
            best(1, TestType::Passing, "4"),
            best(2, TestType::Passing, "9"),
        ];
        assert_eq!(percentile(id(1), &bests), 50.0);
    }

    #[test]
    fn test_top_of_a_large_field_reaches_champion_range() {
        let mut bests: Vec<_> = (2..=21)
            .map(|n| best(n, TestType::Speed20m, &format!("3.{:02}", n)))
            .collect();
        bests.push(best(1, TestType::Speed20m, "2.80"));
        assert_eq!(percentile(id(1), &bests), 100.0);
        assert_eq!(percentile(id(2), &bests), 95.0);
    }
}
