//! Unit tests for valuation and ranking logic

use super::*;
use crate::TeamId;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn update(id: i64, movie: i64, date: NaiveDate, gross: i64, source: &str) -> MovieGrossUpdate {
    MovieGrossUpdate {
        id,
        movie_id: MovieId::new(movie),
        date,
        gross,
        source: source.to_string(),
    }
}

fn membership(id: i64, movie: i64, price: i64) -> MovieMembership {
    MovieMembership {
        id,
        movie_id: MovieId::new(movie),
        team_id: TeamId::new(1),
        price,
    }
}

fn valuation(team: i64, cost: i64, value: i64) -> TeamValuation {
    TeamValuation {
        team_id: TeamId::new(team),
        owner: format!("owner{}", team),
        cost,
        value,
    }
}

#[cfg(test)]
mod movie_value_tests {
    use super::*;

    #[test]
    fn test_movie_no_gross() {
        let updates: Vec<MovieGrossUpdate> = Vec::new();
        assert_eq!(value_on_date(&updates, d(2013, 6, 30), None), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 1), None), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 2), None), 0);
        assert_eq!(latest_value(&updates, None), 0);
    }

    #[test]
    fn test_movie_gross_updates_out_of_order() {
        let mut updates = vec![update(1, 1, d(2013, 7, 2), 1000, "source1")];
        assert_eq!(value_on_date(&updates, d(2013, 7, 2), None), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 1), None), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 3), None), 1000);

        updates.push(update(2, 1, d(2013, 7, 5), 8000, "source1"));
        assert_eq!(value_on_date(&updates, d(2013, 7, 2), None), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 1), None), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 4), None), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 5), None), 8000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 6), None), 8000);

        // Recorded last but dated in between
        updates.push(update(3, 1, d(2013, 7, 3), 4000, "source1"));
        assert_eq!(value_on_date(&updates, d(2013, 7, 2), None), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 1), None), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 3), None), 4000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 4), None), 4000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 5), None), 8000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 6), None), 8000);
        assert_eq!(latest_value(&updates, None), 8000);
    }

    #[test]
    fn test_movie_gross_updates_by_source() {
        let mut updates = vec![update(1, 1, d(2013, 7, 2), 1000, "source1")];
        assert_eq!(value_on_date(&updates, d(2013, 7, 2), Some("source1")), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 1), Some("source1")), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 3), Some("source1")), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 3), Some("source2")), 0);

        updates.push(update(2, 1, d(2013, 7, 5), 8000, "source2"));
        assert_eq!(value_on_date(&updates, d(2013, 7, 4), Some("source1")), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 5), Some("source1")), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 6), Some("source1")), 1000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 4), Some("source2")), 0);
        assert_eq!(value_on_date(&updates, d(2013, 7, 5), Some("source2")), 8000);
        assert_eq!(value_on_date(&updates, d(2013, 7, 6), Some("source2")), 8000);

        // Without a source every update counts
        assert_eq!(value_on_date(&updates, d(2013, 7, 6), None), 8000);
        assert_eq!(latest_value(&updates, Some("source1")), 1000);
    }

    #[test]
    fn test_same_day_updates_take_last_recorded() {
        let updates = vec![
            update(7, 1, d(2013, 7, 2), 1500, "source1"),
            update(3, 1, d(2013, 7, 2), 1200, "source1"),
        ];
        assert_eq!(value_on_date(&updates, d(2013, 7, 2), None), 1500);
        assert_eq!(latest_value(&updates, None), 1500);
    }
}

#[cfg(test)]
mod team_value_tests {
    use super::*;

    #[test]
    fn test_team_cost_and_value() {
        let mut memberships = vec![membership(1, 1, 15)];
        let mut index = GrossIndex::new();
        assert_eq!(team_cost(&memberships), 15);
        assert_eq!(team_value(&memberships, &index), 0);

        index.insert(MovieId::new(1), vec![update(1, 1, d(2013, 7, 3), 2500, "s")]);
        assert_eq!(team_value(&memberships, &index), 2500);

        memberships.push(membership(2, 2, 31));
        assert_eq!(team_cost(&memberships), 46);
        assert_eq!(team_value(&memberships, &index), 2500);

        index.insert(MovieId::new(2), vec![update(2, 2, d(2013, 7, 7), 4000, "s")]);
        assert_eq!(team_value(&memberships, &index), 6500);
        assert_eq!(team_value_on_date(&memberships, &index, d(2013, 7, 4)), 2500);

        index
            .get_mut(&MovieId::new(1))
            .unwrap()
            .push(update(3, 1, d(2013, 7, 6), 4500, "s"));
        assert_eq!(team_value(&memberships, &index), 8500);
        assert_eq!(team_value_on_date(&memberships, &index, d(2013, 7, 6)), 4500);

        index
            .get_mut(&MovieId::new(2))
            .unwrap()
            .push(update(4, 2, d(2013, 7, 6), 3000, "s"));
        assert_eq!(
            team_value(&memberships, &index),
            8500,
            "Team value not changed by adding an update prior to the latest"
        );
    }

    #[test]
    fn test_empty_team() {
        let index = GrossIndex::new();
        assert_eq!(team_cost(&[]), 0);
        assert_eq!(team_value(&[], &index), 0);
        assert_eq!(team_value_on_date(&[], &index, d(2013, 7, 1)), 0);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let memberships = vec![membership(1, 1, i64::MAX), membership(2, 2, 1)];
        let mut index = GrossIndex::new();
        index.insert(
            MovieId::new(1),
            vec![update(1, 1, d(2013, 7, 1), i64::MAX, "source1")],
        );
        index.insert(
            MovieId::new(2),
            vec![update(2, 2, d(2013, 7, 1), 5, "source1")],
        );

        assert_eq!(team_cost(&memberships), i64::MAX);
        assert_eq!(team_value(&memberships, &index), i64::MAX);
        assert_eq!(
            team_value_on_date(&memberships, &index, d(2013, 7, 2)),
            i64::MAX
        );
        assert_eq!(team_value_on_date(&memberships, &index, d(2013, 6, 30)), 0);
    }

    #[test]
    fn test_value_history() {
        let memberships = vec![membership(1, 1, 10), membership(2, 2, 10)];
        let mut index = GrossIndex::new();
        index.insert(
            MovieId::new(1),
            vec![
                update(1, 1, d(2013, 7, 2), 100, "s"),
                update(2, 1, d(2013, 7, 4), 300, "s"),
            ],
        );
        index.insert(MovieId::new(2), vec![update(3, 2, d(2013, 7, 3), 50, "s")]);

        let range = DateRange::new(d(2013, 7, 1), d(2013, 7, 5)).unwrap();
        let history = value_history(&memberships, &index, range);

        let values: Vec<i64> = history.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0, 100, 150, 350, 350]);
        assert_eq!(history[0].date, d(2013, 7, 1));
        assert_eq!(history[4].date, d(2013, 7, 5));
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_rank_by_value_descending() {
        let standings = rank_teams(
            vec![valuation(1, 10, 100), valuation(2, 10, 300), valuation(3, 10, 200)],
            0,
            0,
        );
        let order: Vec<i64> = standings.iter().map(|s| s.team_id.as_i64()).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(standings.iter().all(|s| s.zone == Zone::Safe));
    }

    #[test]
    fn test_ties_broken_by_lower_cost_then_id() {
        let standings = rank_teams(
            vec![valuation(5, 40, 100), valuation(2, 40, 100), valuation(9, 20, 100)],
            0,
            0,
        );
        let order: Vec<i64> = standings.iter().map(|s| s.team_id.as_i64()).collect();
        assert_eq!(order, vec![9, 2, 5]);
    }

    #[test]
    fn test_promotion_and_relegation_zones() {
        let standings = rank_teams(
            vec![
                valuation(1, 10, 500),
                valuation(2, 10, 400),
                valuation(3, 10, 300),
                valuation(4, 10, 200),
                valuation(5, 10, 100),
            ],
            2,
            1,
        );
        let zones: Vec<Zone> = standings.iter().map(|s| s.zone).collect();
        assert_eq!(
            zones,
            vec![Zone::Promoted, Zone::Promoted, Zone::Safe, Zone::Safe, Zone::Relegated]
        );
    }

    #[test]
    fn test_overlapping_cutoffs_prefer_promotion() {
        assert_eq!(zone_for_rank(1, 2, 1, 2), Zone::Promoted);
        assert_eq!(zone_for_rank(2, 2, 1, 2), Zone::Relegated);
        assert_eq!(zone_for_rank(1, 1, 1, 1), Zone::Promoted);
    }

    #[test]
    fn test_relegation_count_larger_than_division() {
        assert_eq!(zone_for_rank(1, 2, 0, 5), Zone::Relegated);
        assert_eq!(zone_for_rank(2, 2, 0, 5), Zone::Relegated);
    }

    #[test]
    fn test_no_cutoffs_means_safe() {
        assert_eq!(zone_for_rank(1, 3, 0, 0), Zone::Safe);
        assert_eq!(zone_for_rank(3, 3, 0, 0), Zone::Safe);
    }

    #[test]
    fn test_rank_empty_division() {
        assert!(rank_teams(Vec::new(), 1, 1).is_empty());
    }
}
