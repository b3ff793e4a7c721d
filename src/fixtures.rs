/// Fixture data for tests, the gallery and development mode
///
/// Every game status and goal shape appears at least once:
/// a preview, a postponement, a live game, and finals decided in
/// regulation, overtime and a shootout.
use std::collections::BTreeMap;

use crate::types::{
    Game, GameProgress, GameStats, GameStatus, Goal, Period, PowerPlay, Record, Scorer, Scores,
    ScoresDate, Standing, Streak, StreakType, Strength, Team, TeamStats, Teams, TimeRemaining,
};

/// Every fixture game, in display order
pub fn scores() -> Scores {
    Scores {
        date: Some(ScoresDate {
            raw: "2024-11-20".to_string(),
            pretty: "Wed Nov 20".to_string(),
        }),
        games: vec![
            live_game(),
            final_game(),
            overtime_game(),
            shootout_game(),
            pre_game(),
            postponed_game(),
        ],
    }
}

pub fn pre_game() -> Game {
    Game {
        status: GameStatus::Preview,
        start_time: Some("2024-11-21T00:00:00Z".to_string()),
        goals: vec![],
        teams: teams(
            team("TOR", 10, "Toronto", "Maple Leafs"),
            team("MTL", 8, "Montréal", "Canadiens"),
        ),
        pre_game_stats: Some(TeamStats {
            records: map(&[
                ("TOR", record(41, 30, Some(11))),
                ("MTL", record(35, 35, Some(12))),
            ]),
            streaks: Some(map(&[
                ("TOR", Some(streak(StreakType::Wins, 5))),
                ("MTL", Some(streak(StreakType::Losses, 3))),
            ])),
            standings: Some(map(&[
                ("TOR", standing("2", "9", Some("+4"))),
                ("MTL", standing("6", "20", Some("-3"))),
            ])),
            playoff_series: None,
        }),
        current_stats: None,
        game_stats: None,
    }
}

pub fn postponed_game() -> Game {
    Game {
        status: GameStatus::Postponed,
        start_time: Some("2024-11-21T03:00:00Z".to_string()),
        goals: vec![],
        teams: teams(
            team("SEA", 55, "Seattle", "Kraken"),
            team("VGK", 54, "Vegas", "Golden Knights"),
        ),
        pre_game_stats: None,
        current_stats: None,
        game_stats: None,
    }
}

pub fn live_game() -> Game {
    Game {
        status: GameStatus::Live {
            progress: GameProgress {
                current_period: 2,
                current_period_ordinal: "2nd".to_string(),
                current_period_time_remaining: TimeRemaining {
                    pretty: "08:42".to_string(),
                    min: 8,
                    sec: 42,
                },
                is_intermission: false,
            },
        },
        start_time: Some("2024-11-20T23:00:00Z".to_string()),
        goals: vec![
            goal_with(
                Period::Regular(1),
                5,
                12,
                scorer("David Pastrnak", 14),
                vec![scorer("Brad Marchand", 9), scorer("Charlie McAvoy", 11)],
                "BOS",
                Some(Strength::PowerPlay),
            ),
            goal(Period::Regular(2), 1, 3, scorer("Artemi Panarin", 12), "NYR"),
        ],
        teams: teams(
            team("BOS", 6, "Boston", "Bruins"),
            team("NYR", 3, "New York", "Rangers"),
        ),
        pre_game_stats: Some(TeamStats {
            records: map(&[
                ("BOS", record(10, 8, Some(2))),
                ("NYR", record(12, 5, Some(1))),
            ]),
            ..Default::default()
        }),
        current_stats: None,
        game_stats: Some(GameStats {
            shots: map(&[("BOS", 14), ("NYR", 17)]),
            hits: map(&[("BOS", 12), ("NYR", 12)]),
            pim: map(&[("BOS", 2), ("NYR", 4)]),
            ..Default::default()
        }),
    }
}

pub fn final_game() -> Game {
    let records = map(&[
        ("EDM", record(11, 9, Some(2))),
        ("VAN", record(10, 6, Some(3))),
    ]);
    let mut after = records.clone();
    after.insert("EDM".to_string(), record(12, 9, Some(2)));
    after.insert("VAN".to_string(), record(10, 7, Some(3)));

    Game {
        status: GameStatus::Final,
        start_time: Some("2024-11-20T03:00:00Z".to_string()),
        goals: vec![
            goal(Period::Regular(1), 4, 10, scorer("Connor McDavid", 8), "EDM"),
            goal_with(
                Period::Regular(1),
                15,
                30,
                scorer("Elias Pettersson", 6),
                vec![],
                "VAN",
                None,
            ),
            goal_with(
                Period::Regular(2),
                7,
                45,
                scorer("Leon Draisaitl", 15),
                vec![scorer("Connor McDavid", 21)],
                "EDM",
                Some(Strength::ShortHanded),
            ),
            Goal::InPlay {
                period: Period::Regular(3),
                min: 19,
                sec: 10,
                scorer: scorer("Zach Hyman", 5),
                assists: vec![],
                team: "EDM".to_string(),
                strength: None,
                empty_net: true,
            },
        ],
        teams: teams(
            team("EDM", 22, "Edmonton", "Oilers"),
            team("VAN", 23, "Vancouver", "Canucks"),
        ),
        pre_game_stats: Some(TeamStats {
            records,
            ..Default::default()
        }),
        current_stats: Some(TeamStats {
            records: after,
            streaks: Some(map(&[
                ("EDM", Some(streak(StreakType::Wins, 2))),
                ("VAN", Some(streak(StreakType::Losses, 1))),
            ])),
            standings: None,
            playoff_series: None,
        }),
        game_stats: Some(GameStats {
            shots: map(&[("EDM", 31), ("VAN", 28)]),
            blocked: map(&[("EDM", 12), ("VAN", 15)]),
            hits: map(&[("EDM", 20), ("VAN", 24)]),
            giveaways: map(&[("EDM", 7), ("VAN", 9)]),
            takeaways: map(&[("EDM", 6), ("VAN", 6)]),
            pim: map(&[("EDM", 8), ("VAN", 4)]),
            face_off_win_percentage: map(&[("EDM", "54.2".to_string()), ("VAN", "45.8".to_string())]),
            power_play: map(&[
                ("EDM", power_play(1, 3, "33.3")),
                ("VAN", power_play(0, 4, "0.0")),
            ]),
        }),
    }
}

pub fn overtime_game() -> Game {
    Game {
        status: GameStatus::Final,
        start_time: Some("2024-11-20T01:00:00Z".to_string()),
        goals: vec![
            goal(Period::Regular(1), 9, 2, scorer("Jason Robertson", 7), "DAL"),
            goal(Period::Regular(3), 12, 40, scorer("Nathan MacKinnon", 10), "COL"),
            goal(Period::Overtime(1), 2, 1, scorer("Cale Makar", 6), "COL"),
        ],
        teams: teams(
            team("DAL", 25, "Dallas", "Stars"),
            team("COL", 21, "Colorado", "Avalanche"),
        ),
        pre_game_stats: None,
        current_stats: None,
        game_stats: None,
    }
}

pub fn shootout_game() -> Game {
    Game {
        status: GameStatus::Final,
        start_time: Some("2024-11-20T00:00:00Z".to_string()),
        goals: vec![
            goal(Period::Regular(1), 3, 33, scorer("Sebastian Aho", 9), "CAR"),
            goal(Period::Regular(2), 18, 5, scorer("Jack Hughes", 8), "NJD"),
            shootout_goal("Seth Jarvis", "CAR"),
            shootout_goal("Nico Hischier", "NJD"),
            shootout_goal("Martin Necas", "CAR"),
        ],
        teams: teams(
            team("CAR", 12, "Carolina", "Hurricanes"),
            team("NJD", 1, "New Jersey", "Devils"),
        ),
        pre_game_stats: None,
        current_stats: None,
        game_stats: None,
    }
}

fn teams(away: Team, home: Team) -> Teams {
    Teams { away, home }
}

fn team(abbreviation: &str, id: u32, short_name: &str, team_name: &str) -> Team {
    Team {
        abbreviation: abbreviation.to_string(),
        id: Some(id),
        location_name: Some(short_name.to_string()),
        short_name: Some(short_name.to_string()),
        team_name: Some(team_name.to_string()),
    }
}

fn scorer(player: &str, season_total: u32) -> Scorer {
    Scorer {
        player: player.to_string(),
        season_total: Some(season_total),
    }
}

fn goal(period: Period, min: u32, sec: u32, scorer: Scorer, team: &str) -> Goal {
    goal_with(period, min, sec, scorer, vec![], team, None)
}

fn goal_with(
    period: Period,
    min: u32,
    sec: u32,
    scorer: Scorer,
    assists: Vec<Scorer>,
    team: &str,
    strength: Option<Strength>,
) -> Goal {
    Goal::InPlay {
        period,
        min,
        sec,
        scorer,
        assists,
        team: team.to_string(),
        strength,
        empty_net: false,
    }
}

fn shootout_goal(player: &str, team: &str) -> Goal {
    Goal::Shootout {
        scorer: Scorer {
            player: player.to_string(),
            season_total: None,
        },
        team: team.to_string(),
    }
}

fn record(wins: u32, losses: u32, ot: Option<u32>) -> Record {
    Record { wins, losses, ot }
}

fn streak(kind: StreakType, count: u32) -> Streak {
    Streak { kind, count }
}

fn standing(division_rank: &str, league_rank: &str, spot: Option<&str>) -> Standing {
    Standing {
        division_rank: division_rank.to_string(),
        league_rank: league_rank.to_string(),
        points_from_playoff_spot: spot.map(str::to_string),
    }
}

fn power_play(goals: u32, opportunities: u32, percentage: &str) -> PowerPlay {
    PowerPlay {
        goals,
        opportunities,
        percentage: percentage.to_string(),
    }
}

fn map<V: Clone>(entries: &[(&str, V)]) -> BTreeMap<String, V> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
