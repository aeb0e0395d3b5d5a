use serde::Serialize;

/// Districts whose Democratic share is within this margin of 0.5 count as tossups.
pub const TOSSUP_MARGIN: f64 = 0.02;

/// Seat counts across a plan.
///
/// A tossup is also counted as a Democratic or Republican seat when its share is
/// off 0.5, so the three counts can sum to more than `total_districts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSummary {
    pub average_dem_share: f64,
    pub dem_seats: u32,
    pub rep_seats: u32,
    pub tossup_seats: u32,
    pub total_districts: u32,
}

impl SeatSummary {
    /// Classify each district share and average them (0.5 for no districts).
    pub fn from_shares(shares: &[f64]) -> Self {
        let count = |f: fn(f64) -> bool| shares.iter().filter(|&&s| f(s)).count() as u32;

        Self {
            average_dem_share: if shares.is_empty() { 0.5 } else { shares.iter().sum::<f64>() / shares.len() as f64 },
            dem_seats: count(|s| s > 0.5),
            rep_seats: count(|s| s < 0.5),
            tossup_seats: count(is_tossup),
            total_districts: shares.len() as u32,
        }
    }
}

#[inline]
pub fn is_tossup(dem_share: f64) -> bool { (dem_share - 0.5).abs() < TOSSUP_MARGIN }

/// Votes above the winning threshold for the winner, all votes for the loser.
/// Ties go to the Republican side. Returns `(wasted_dem, wasted_rep)`.
pub(crate) fn wasted_votes(dem: u64, rep: u64) -> (i64, i64) {
    let (dem, rep) = (dem as i64, rep as i64);
    let threshold = (dem + rep) / 2 + 1;

    if dem > rep { (dem - threshold, rep) } else { (dem, rep - threshold) }
}

/// Efficiency gap over `(dem, rep)` district totals: net wasted votes as a fraction
/// of all votes cast. Positive values favor Republicans. Districts with no votes
/// are skipped; 0 if there are no votes at all.
pub fn efficiency_gap(districts: impl IntoIterator<Item = (u64, u64)>) -> f64 {
    let (wasted_dem, wasted_rep, total) = districts.into_iter()
        .filter(|&(dem, rep)| dem + rep > 0)
        .fold((0i64, 0i64, 0u64), |(wd, wr, total), (dem, rep)| {
            let (d, r) = wasted_votes(dem, rep);
            (wd + d, wr + r, total + dem + rep)
        });

    if total == 0 { 0.0 } else { (wasted_dem - wasted_rep) as f64 / total as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tossups_overlap_with_party_seats() {
        let summary = SeatSummary::from_shares(&[0.6, 0.51, 0.5, 0.49, 0.3]);
        assert_eq!(summary.dem_seats, 2);
        assert_eq!(summary.rep_seats, 2);
        assert_eq!(summary.tossup_seats, 3);
        assert_eq!(summary.total_districts, 5);
        assert!((summary.average_dem_share - 0.48).abs() < 1e-12);
    }

    #[test]
    fn no_districts_averages_to_even() {
        let summary = SeatSummary::from_shares(&[]);
        assert_eq!(summary.average_dem_share, 0.5);
        assert_eq!(summary.total_districts, 0);
    }

    #[test]
    fn margin_boundary_is_not_a_tossup() {
        assert!(is_tossup(0.5));
        assert!(is_tossup(0.515));
        assert!(!is_tossup(0.53));
        assert!(!is_tossup(0.47));
    }

    #[test]
    fn wasted_votes_follow_the_winner() {
        assert_eq!(wasted_votes(70, 30), (70 - 51, 30));
        assert_eq!(wasted_votes(30, 70), (30, 70 - 51));
        // Ties count as a Republican win.
        assert_eq!(wasted_votes(50, 50), (50, -1));
    }

    #[test]
    fn efficiency_gap_of_packed_districts() {
        // Dems packed into one district, narrowly losing two others.
        let gap = efficiency_gap([(90, 10), (45, 55), (45, 55)]);
        // Wasted: D = 39 + 45 + 45 = 129, R = 10 + 4 + 4 = 18, total 300.
        assert!((gap - 111.0 / 300.0).abs() < 1e-12);
        assert!(gap > 0.0);
    }

    #[test]
    fn efficiency_gap_without_votes_is_zero() {
        assert_eq!(efficiency_gap([(0, 0), (0, 0)]), 0.0);
        assert_eq!(efficiency_gap(std::iter::empty()), 0.0);
    }
}
