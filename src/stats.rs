//! Stat comparison rows for game cards
//!
//! Each row shows one statistic for both teams. The side whose rating is
//! strictly greater gets highlighted; ties and missing values highlight
//! neither side.

use std::cmp::Ordering;

use crate::formatting::{format_record, format_streak, format_win_percentage, points_percentage, PLACEHOLDER};
use crate::types::{Game, GameStats, Record, Standing, Streak, StreakType, TeamStats};

/// Comparable score of a stat value
#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Rating::Number(a), Rating::Number(b)) => a.partial_cmp(b),
            (Rating::Text(a), Rating::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Which side of a stat row is visually emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Away,
    Home,
    Neither,
}

/// Decide the highlighted side for a pair of values
pub fn highlight<T, F>(away: Option<&T>, home: Option<&T>, rating: F) -> Highlight
where
    T: ?Sized,
    F: Fn(&T) -> Option<Rating>,
{
    let (Some(away), Some(home)) = (away, home) else {
        return Highlight::Neither;
    };
    let (Some(away_rating), Some(home_rating)) = (rating(away), rating(home)) else {
        return Highlight::Neither;
    };
    match away_rating.partial_cmp(&home_rating) {
        Some(Ordering::Greater) => Highlight::Away,
        Some(Ordering::Less) => Highlight::Home,
        _ => Highlight::Neither,
    }
}

pub fn identity_rating(value: &u32) -> Option<Rating> {
    Some(Rating::Number(f64::from(*value)))
}

/// Lower is better (giveaways, penalty minutes)
pub fn inverse_rating(value: &u32) -> Option<Rating> {
    Some(Rating::Number(-f64::from(*value)))
}

pub fn streak_rating(streak: &Option<Streak>) -> Option<Rating> {
    let score = match streak {
        Some(Streak { kind: StreakType::Wins, count }) => f64::from(*count),
        Some(Streak { kind: StreakType::Losses, count }) => -f64::from(*count),
        Some(Streak { kind: StreakType::Ot, .. }) | None => 0.0,
    };
    Some(Rating::Number(score))
}

/// Ranks compare inverted: first place beats second
pub fn rank_rating(rank: &str) -> Option<Rating> {
    rank.trim().parse::<f64>().ok().map(|r| Rating::Number(-r))
}

pub fn record_rating(record: &Record) -> Option<Rating> {
    Some(Rating::Number(points_percentage(record)))
}

/// "+4" / "-2" points from a playoff spot
pub fn playoff_spot_rating(points: &str) -> Option<Rating> {
    points.trim().trim_start_matches('+').parse::<f64>().ok().map(Rating::Number)
}

/// Decimal strings such as "52.3"
pub fn percentage_rating(value: &str) -> Option<Rating> {
    value.trim().parse::<f64>().ok().map(Rating::Number)
}

/// One rendered comparison row
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub away: String,
    pub home: String,
    pub highlight: Highlight,
}

impl StatRow {
    fn build<T, F, D>(label: &'static str, away: Option<&T>, home: Option<&T>, display: D, rating: F) -> Option<Self>
    where
        T: ?Sized,
        F: Fn(&T) -> Option<Rating>,
        D: Fn(&T) -> String,
    {
        if away.is_none() && home.is_none() {
            return None;
        }
        Some(StatRow {
            label,
            away: away.map(&display).unwrap_or_else(|| PLACEHOLDER.to_string()),
            home: home.map(&display).unwrap_or_else(|| PLACEHOLDER.to_string()),
            highlight: highlight(away, home, rating),
        })
    }
}

/// Team comparison rows (standings, record, streak, playoff position)
pub fn team_stat_rows(game: &Game, stats: &TeamStats) -> Vec<StatRow> {
    let away = game.away().abbreviation.as_str();
    let home = game.home().abbreviation.as_str();

    let away_standing = stats.standing(away);
    let home_standing = stats.standing(home);
    let away_record = stats.record(away);
    let home_record = stats.record(home);

    let streaks = stats.streaks.as_ref();
    let away_streak = streaks.and_then(|s| s.get(away));
    let home_streak = streaks.and_then(|s| s.get(home));

    let away_spot = away_standing.and_then(|s| s.points_from_playoff_spot.as_deref());
    let home_spot = home_standing.and_then(|s| s.points_from_playoff_spot.as_deref());

    let away_series = stats.series_wins(away);
    let home_series = stats.series_wins(home);

    let div_rank = |s: &Standing| s.division_rank.clone();
    let league_rank = |s: &Standing| s.league_rank.clone();

    [
        StatRow::build("Div. rank", away_standing, home_standing, div_rank, |s| {
            rank_rating(&s.division_rank)
        }),
        StatRow::build("League rank", away_standing, home_standing, league_rank, |s| {
            rank_rating(&s.league_rank)
        }),
        StatRow::build("Record", away_record, home_record, format_record, record_rating),
        StatRow::build("Point %", away_record, home_record, format_win_percentage, record_rating),
        StatRow::build(
            "Streak",
            away_streak,
            home_streak,
            |s: &Option<Streak>| format_streak(s.as_ref()),
            streak_rating,
        ),
        StatRow::build("Playoff spot", away_spot, home_spot, str::to_string, playoff_spot_rating),
        StatRow::build("Series", away_series.as_ref(), home_series.as_ref(), u32::to_string, identity_rating),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// In-game comparison rows (shots, hits, special teams)
pub fn game_stat_rows(game: &Game, stats: &GameStats) -> Vec<StatRow> {
    let away = game.away().abbreviation.as_str();
    let home = game.home().abbreviation.as_str();

    let count = |label, values: &std::collections::BTreeMap<String, u32>, rating: fn(&u32) -> Option<Rating>| {
        StatRow::build(label, values.get(away), values.get(home), u32::to_string, rating)
    };

    let face_offs = &stats.face_off_win_percentage;
    let power_play = &stats.power_play;

    [
        count("Shots", &stats.shots, identity_rating),
        count("Blocked", &stats.blocked, identity_rating),
        count("Hits", &stats.hits, identity_rating),
        count("Giveaways", &stats.giveaways, inverse_rating),
        count("Takeaways", &stats.takeaways, identity_rating),
        count("PIM", &stats.pim, inverse_rating),
        StatRow::build(
            "Face-off %",
            face_offs.get(away).map(String::as_str),
            face_offs.get(home).map(String::as_str),
            str::to_string,
            percentage_rating,
        ),
        StatRow::build(
            "Power play",
            power_play.get(away),
            power_play.get(home),
            |pp| format!("{}/{}", pp.goals, pp.opportunities),
            |pp| percentage_rating(&pp.percentage),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::collections::BTreeMap;

    #[test]
    fn test_highlight_greater_side() {
        assert_eq!(highlight(Some(&10), Some(&7), identity_rating), Highlight::Away);
        assert_eq!(highlight(Some(&3), Some(&7), identity_rating), Highlight::Home);
    }

    #[test]
    fn test_highlight_ties_and_missing_values() {
        assert_eq!(highlight(Some(&7), Some(&7), identity_rating), Highlight::Neither);
        assert_eq!(highlight(None, Some(&7), identity_rating), Highlight::Neither);
        assert_eq!(highlight::<u32, _>(None, None, identity_rating), Highlight::Neither);
    }

    #[test]
    fn test_highlight_inverse_rating() {
        assert_eq!(highlight(Some(&10), Some(&7), inverse_rating), Highlight::Home);
    }

    #[test]
    fn test_highlight_lexicographic_rating() {
        let text = |s: &str| Some(Rating::Text(s.to_string()));
        assert_eq!(highlight(Some("b"), Some("a"), text), Highlight::Away);
        assert_eq!(highlight(Some("a"), Some("a"), text), Highlight::Neither);
    }

    #[test]
    fn test_highlight_nan_is_neither() {
        let empty = Record { wins: 0, losses: 0, ot: Some(0) };
        let some = Record { wins: 3, losses: 1, ot: Some(0) };
        assert_eq!(highlight(Some(&empty), Some(&some), record_rating), Highlight::Neither);
    }

    #[test]
    fn test_streak_rating() {
        let wins = Some(Streak { kind: StreakType::Wins, count: 5 });
        let losses = Some(Streak { kind: StreakType::Losses, count: 3 });
        let ot = Some(Streak { kind: StreakType::Ot, count: 2 });
        assert_eq!(streak_rating(&wins), Some(Rating::Number(5.0)));
        assert_eq!(streak_rating(&losses), Some(Rating::Number(-3.0)));
        assert_eq!(streak_rating(&ot), Some(Rating::Number(0.0)));
        assert_eq!(streak_rating(&None), Some(Rating::Number(0.0)));
    }

    #[test]
    fn test_rank_and_spot_ratings() {
        assert_eq!(highlight(Some("1"), Some("4"), rank_rating), Highlight::Away);
        assert_eq!(highlight(Some("n/a"), Some("4"), rank_rating), Highlight::Neither);
        assert_eq!(highlight(Some("-2"), Some("+4"), playoff_spot_rating), Highlight::Home);
    }

    #[test]
    fn test_team_stat_rows_from_fixture() {
        let game = fixtures::pre_game();
        let stats = game.pre_game_stats.clone().unwrap();
        let rows = team_stat_rows(&game, &stats);

        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Div. rank", "League rank", "Record", "Point %", "Streak", "Playoff spot"]);

        let point_pct = rows.iter().find(|r| r.label == "Point %").unwrap();
        assert_eq!(point_pct.away, "0.567");
        assert_eq!(point_pct.highlight, Highlight::Away);

        let streak = rows.iter().find(|r| r.label == "Streak").unwrap();
        assert_eq!(streak.away, "W5");
        assert_eq!(streak.home, "L3");
        assert_eq!(streak.highlight, Highlight::Away);
    }

    #[test]
    fn test_team_stat_rows_placeholder_for_one_side() {
        let game = fixtures::pre_game();
        let mut records = BTreeMap::new();
        records.insert(game.home().abbreviation.clone(), Record { wins: 1, losses: 0, ot: None });
        let stats = TeamStats { records, ..Default::default() };

        let rows = team_stat_rows(&game, &stats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].away, "-");
        assert_eq!(rows[0].home, "1-0");
        assert_eq!(rows[0].highlight, Highlight::Neither);
    }

    #[test]
    fn test_game_stat_rows_from_fixture() {
        let game = fixtures::final_game();
        let rows = game_stat_rows(&game, game.game_stats.as_ref().unwrap());

        let shots = rows.iter().find(|r| r.label == "Shots").unwrap();
        assert_eq!((shots.away.as_str(), shots.home.as_str()), ("31", "28"));
        assert_eq!(shots.highlight, Highlight::Away);

        let pim = rows.iter().find(|r| r.label == "PIM").unwrap();
        assert_eq!(pim.highlight, Highlight::Home);

        let pp = rows.iter().find(|r| r.label == "Power play").unwrap();
        assert_eq!(pp.away, "1/3");
    }
}
