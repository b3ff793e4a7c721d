/// Scoreboard feed model
///
/// These types mirror the JSON scores feed. Every refresh produces a fresh
/// `Scores` snapshot; nothing here is mutated after deserialization.
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of regulation periods in a game
pub const REGULATION_PERIODS: u8 = 3;

/// Top-level feed document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(default)]
    pub date: Option<ScoresDate>,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoresDate {
    pub raw: String,
    pub pretty: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub status: GameStatus,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    pub teams: Teams,
    #[serde(default)]
    pub pre_game_stats: Option<TeamStats>,
    #[serde(default)]
    pub current_stats: Option<TeamStats>,
    #[serde(default)]
    pub game_stats: Option<GameStats>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Teams {
    pub away: Team,
    pub home: Team,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub abbreviation: String,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
}

impl Team {
    /// Name shown on a game card: "Toronto Maple Leafs", falling back to the abbreviation
    pub fn display_name(&self) -> String {
        match (&self.short_name, &self.team_name) {
            (Some(short), Some(name)) => format!("{} {}", short, name),
            (None, Some(name)) => name.clone(),
            (Some(short), None) => short.clone(),
            (None, None) => self.abbreviation.clone(),
        }
    }

    /// Fragment identifier of this team's logo in the season's sprite sheet
    pub fn logo_fragment(&self, season: &str) -> Option<String> {
        self.id.map(|id| format!("team-{}-{}-dark", id, season))
    }
}

/// Game status, tagged by `state` in the feed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Live { progress: GameProgress },
    Final,
    Postponed,
    Preview,
}

impl GameStatus {
    /// Whether any play has happened (live or final)
    pub fn has_started(&self) -> bool {
        matches!(self, GameStatus::Live { .. } | GameStatus::Final)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameStatus::Live { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    pub current_period: u8,
    pub current_period_ordinal: String,
    pub current_period_time_remaining: TimeRemaining,
    #[serde(default)]
    pub is_intermission: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeRemaining {
    pub pretty: String,
    pub min: u32,
    pub sec: u32,
}

/// Game period in play order: regulation periods, overtimes, then the shootout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Regular(u8),
    Overtime(u8),
    Shootout,
}

impl Period {
    /// Period following this one; regulation rolls into the first overtime
    pub fn next(self) -> Period {
        match self {
            Period::Regular(n) if n < REGULATION_PERIODS => Period::Regular(n + 1),
            Period::Regular(_) => Period::Overtime(1),
            Period::Overtime(n) => Period::Overtime(n.saturating_add(1)),
            Period::Shootout => Period::Shootout,
        }
    }

    /// Period from the feed's running period number (4 = first overtime)
    pub fn from_number(number: u8) -> Period {
        if number <= REGULATION_PERIODS {
            Period::Regular(number.max(1))
        } else {
            Period::Overtime(number - REGULATION_PERIODS)
        }
    }

    fn order_key(&self) -> (u8, u8) {
        match self {
            Period::Regular(n) => (0, *n),
            Period::Overtime(n) => (1, *n),
            Period::Shootout => (2, 0),
        }
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Regular(n) => write!(f, "{}", n),
            Period::Overtime(1) => write!(f, "OT"),
            Period::Overtime(n) => write!(f, "{}OT", n),
            Period::Shootout => write!(f, "SO"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SO" => Ok(Period::Shootout),
            "OT" => Ok(Period::Overtime(1)),
            other => {
                if let Some(count) = other.strip_suffix("OT") {
                    return count
                        .parse::<u8>()
                        .map(Period::Overtime)
                        .map_err(|_| format!("invalid period: {}", s));
                }
                match other.parse::<u8>() {
                    Ok(n) if (1..=REGULATION_PERIODS).contains(&n) => Ok(Period::Regular(n)),
                    _ => Err(format!("invalid period: {}", s)),
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorer {
    pub player: String,
    #[serde(default)]
    pub season_total: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Strength {
    #[serde(rename = "PPG")]
    PowerPlay,
    #[serde(rename = "SHG")]
    ShortHanded,
}

/// A single scoring event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawGoal")]
pub enum Goal {
    InPlay {
        period: Period,
        min: u32,
        sec: u32,
        scorer: Scorer,
        assists: Vec<Scorer>,
        team: String,
        strength: Option<Strength>,
        empty_net: bool,
    },
    Shootout {
        scorer: Scorer,
        team: String,
    },
}

impl Goal {
    pub fn team(&self) -> &str {
        match self {
            Goal::InPlay { team, .. } | Goal::Shootout { team, .. } => team,
        }
    }

    pub fn scorer(&self) -> &Scorer {
        match self {
            Goal::InPlay { scorer, .. } | Goal::Shootout { scorer, .. } => scorer,
        }
    }

    pub fn period(&self) -> Period {
        match self {
            Goal::InPlay { period, .. } => *period,
            Goal::Shootout { .. } => Period::Shootout,
        }
    }
}

/// Wire shape shared by both goal kinds
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGoal {
    period: Period,
    #[serde(default)]
    min: Option<u32>,
    #[serde(default)]
    sec: Option<u32>,
    scorer: Scorer,
    #[serde(default)]
    assists: Vec<Scorer>,
    team: String,
    #[serde(default)]
    strength: Option<Strength>,
    #[serde(default)]
    empty_net: bool,
}

impl TryFrom<RawGoal> for Goal {
    type Error = String;

    fn try_from(raw: RawGoal) -> Result<Self, Self::Error> {
        match (raw.period, raw.min, raw.sec) {
            (Period::Shootout, None, None) => Ok(Goal::Shootout {
                scorer: raw.scorer,
                team: raw.team,
            }),
            (Period::Shootout, _, _) => Err("shootout goal cannot carry a game clock".to_string()),
            (period, Some(min), Some(sec)) => Ok(Goal::InPlay {
                period,
                min,
                sec,
                scorer: raw.scorer,
                assists: raw.assists,
                team: raw.team,
                strength: raw.strength,
                empty_net: raw.empty_net,
            }),
            (period, _, _) => Err(format!("goal in period {} is missing its time", period)),
        }
    }
}

/// Per-team statistics keyed by team abbreviation
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    #[serde(default)]
    pub records: BTreeMap<String, Record>,
    #[serde(default)]
    pub streaks: Option<BTreeMap<String, Option<Streak>>>,
    #[serde(default)]
    pub standings: Option<BTreeMap<String, Standing>>,
    #[serde(default)]
    pub playoff_series: Option<PlayoffSeries>,
}

impl TeamStats {
    pub fn record(&self, team: &str) -> Option<&Record> {
        self.records.get(team)
    }

    pub fn streak(&self, team: &str) -> Option<&Streak> {
        self.streaks.as_ref()?.get(team)?.as_ref()
    }

    pub fn standing(&self, team: &str) -> Option<&Standing> {
        self.standings.as_ref()?.get(team)
    }

    pub fn series_wins(&self, team: &str) -> Option<u32> {
        self.playoff_series.as_ref()?.wins.get(team).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ot: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreakType {
    Wins,
    Losses,
    Ot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Streak {
    #[serde(rename = "type")]
    pub kind: StreakType,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub division_rank: String,
    pub league_rank: String,
    #[serde(default)]
    pub points_from_playoff_spot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayoffSeries {
    pub round: u8,
    #[serde(default)]
    pub wins: BTreeMap<String, u32>,
}

/// In-game statistics keyed by team abbreviation
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    #[serde(default)]
    pub shots: BTreeMap<String, u32>,
    #[serde(default)]
    pub blocked: BTreeMap<String, u32>,
    #[serde(default)]
    pub hits: BTreeMap<String, u32>,
    #[serde(default)]
    pub giveaways: BTreeMap<String, u32>,
    #[serde(default)]
    pub takeaways: BTreeMap<String, u32>,
    #[serde(default)]
    pub pim: BTreeMap<String, u32>,
    #[serde(default)]
    pub face_off_win_percentage: BTreeMap<String, String>,
    #[serde(default)]
    pub power_play: BTreeMap<String, PowerPlay>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PowerPlay {
    pub goals: u32,
    pub opportunities: u32,
    pub percentage: String,
}

/// Goals per period for one team: regulation periods, overtime total, shootout total
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodGoals {
    pub regulation: [u32; REGULATION_PERIODS as usize],
    pub overtime: u32,
    pub shootout: u32,
}

impl Game {
    pub fn away(&self) -> &Team {
        &self.teams.away
    }

    pub fn home(&self) -> &Team {
        &self.teams.home
    }

    /// Final score of one team from every goal in the feed
    pub fn score(&self, team: &str) -> u32 {
        tally_score(&self.goals, team)
    }

    pub fn has_overtime(&self) -> bool {
        self.goals.iter().any(|g| matches!(g.period(), Period::Overtime(_)))
            || matches!(&self.status, GameStatus::Live { progress } if progress.current_period > REGULATION_PERIODS)
    }

    pub fn has_shootout(&self) -> bool {
        self.goals.iter().any(|g| matches!(g, Goal::Shootout { .. }))
    }

    /// Whether the game carries playoff series data
    pub fn is_playoff(&self) -> bool {
        self.pre_game_stats
            .as_ref()
            .and_then(|s| s.playoff_series.as_ref())
            .is_some()
    }
}

/// Score contribution of a goal list for one team
///
/// In-play goals count one each; the shootout winner gets a single goal.
pub fn tally_score<'a, I>(goals: I, team: &str) -> u32
where
    I: IntoIterator<Item = &'a Goal>,
{
    let mut in_play = 0;
    let (mut own_shootout, mut other_shootout) = (0, 0);
    for goal in goals {
        match (goal, goal.team() == team) {
            (Goal::InPlay { .. }, true) => in_play += 1,
            (Goal::InPlay { .. }, false) => {}
            (Goal::Shootout { .. }, true) => own_shootout += 1,
            (Goal::Shootout { .. }, false) => other_shootout += 1,
        }
    }
    in_play + u32::from(own_shootout > other_shootout)
}

/// Goals per period for one team
pub fn tally_period_goals<'a, I>(goals: I, team: &str) -> PeriodGoals
where
    I: IntoIterator<Item = &'a Goal>,
{
    let mut result = PeriodGoals::default();
    for goal in goals.into_iter().filter(|g| g.team() == team) {
        match goal.period() {
            Period::Regular(n) => result.regulation[usize::from(n.clamp(1, REGULATION_PERIODS) - 1)] += 1,
            Period::Overtime(_) => result.overtime += 1,
            Period::Shootout => result.shootout += 1,
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE_GAME: &str = r#"{
        "status": {
            "state": "LIVE",
            "progress": {
                "currentPeriod": 2,
                "currentPeriodOrdinal": "2nd",
                "currentPeriodTimeRemaining": { "pretty": "08:42", "min": 8, "sec": 42 }
            }
        },
        "goals": [
            {
                "period": "1", "min": 5, "sec": 12,
                "scorer": { "player": "Auston Matthews", "seasonTotal": 12 },
                "assists": [{ "player": "Mitch Marner", "seasonTotal": 20 }],
                "team": "TOR", "strength": "PPG"
            },
            {
                "period": "2", "min": 1, "sec": 3,
                "scorer": { "player": "Nick Suzuki", "seasonTotal": 9 },
                "team": "MTL", "emptyNet": true
            }
        ],
        "teams": {
            "away": { "abbreviation": "TOR", "id": 10, "shortName": "Toronto", "teamName": "Maple Leafs" },
            "home": { "abbreviation": "MTL", "id": 8 }
        }
    }"#;

    #[test]
    fn test_parse_live_game() {
        let game: Game = serde_json::from_str(LIVE_GAME).unwrap();

        match &game.status {
            GameStatus::Live { progress } => {
                assert_eq!(progress.current_period, 2);
                assert_eq!(progress.current_period_time_remaining.pretty, "08:42");
                assert!(!progress.is_intermission);
            }
            other => panic!("expected live status, got {:?}", other),
        }
        assert_eq!(game.goals.len(), 2);
        assert_eq!(game.score("TOR"), 1);
        assert_eq!(game.score("MTL"), 1);
        assert_eq!(game.away().display_name(), "Toronto Maple Leafs");
        assert_eq!(game.home().display_name(), "MTL");
    }

    #[test]
    fn test_parse_goal_optional_fields() {
        let game: Game = serde_json::from_str(LIVE_GAME).unwrap();

        match &game.goals[0] {
            Goal::InPlay { strength, empty_net, assists, .. } => {
                assert_eq!(*strength, Some(Strength::PowerPlay));
                assert!(!empty_net);
                assert_eq!(assists.len(), 1);
            }
            other => panic!("expected in-play goal, got {:?}", other),
        }
        match &game.goals[1] {
            Goal::InPlay { strength, empty_net, assists, .. } => {
                assert_eq!(*strength, None);
                assert!(empty_net);
                assert!(assists.is_empty());
            }
            other => panic!("expected in-play goal, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_shootout_goal() {
        let json = r#"{ "period": "SO", "scorer": { "player": "Cole Caufield" }, "team": "MTL" }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.period(), Period::Shootout);
        assert_eq!(goal.team(), "MTL");
        assert!(matches!(goal, Goal::Shootout { .. }));
    }

    #[test]
    fn test_in_play_goal_requires_time() {
        let json = r#"{ "period": "3", "scorer": { "player": "X" }, "team": "MTL" }"#;
        assert!(serde_json::from_str::<Goal>(json).is_err());
    }

    #[test]
    fn test_parse_terminal_statuses() {
        for (state, expected) in [
            ("FINAL", GameStatus::Final),
            ("POSTPONED", GameStatus::Postponed),
            ("PREVIEW", GameStatus::Preview),
        ] {
            let json = format!(r#"{{ "state": "{}" }}"#, state);
            let status: GameStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_period_parsing_and_order() {
        assert_eq!("1".parse::<Period>(), Ok(Period::Regular(1)));
        assert_eq!("OT".parse::<Period>(), Ok(Period::Overtime(1)));
        assert_eq!("2OT".parse::<Period>(), Ok(Period::Overtime(2)));
        assert_eq!("SO".parse::<Period>(), Ok(Period::Shootout));
        assert!("4".parse::<Period>().is_err());

        assert!(Period::Regular(3) < Period::Overtime(1));
        assert!(Period::Overtime(1) < Period::Overtime(2));
        assert!(Period::Overtime(4) < Period::Shootout);
        assert_eq!(Period::Regular(3).next(), Period::Overtime(1));
        assert_eq!(Period::Overtime(u8::MAX).next(), Period::Overtime(u8::MAX));
        assert_eq!(Period::from_number(5), Period::Overtime(2));
    }

    #[test]
    fn test_shootout_winner_gets_one_goal() {
        let json = r#"{
            "status": { "state": "FINAL" },
            "goals": [
                { "period": "1", "min": 1, "sec": 0, "scorer": { "player": "A" }, "team": "CAR" },
                { "period": "2", "min": 1, "sec": 0, "scorer": { "player": "B" }, "team": "NJD" },
                { "period": "SO", "scorer": { "player": "C" }, "team": "CAR" },
                { "period": "SO", "scorer": { "player": "D" }, "team": "CAR" },
                { "period": "SO", "scorer": { "player": "E" }, "team": "NJD" }
            ],
            "teams": { "away": { "abbreviation": "CAR" }, "home": { "abbreviation": "NJD" } }
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.score("CAR"), 2);
        assert_eq!(game.score("NJD"), 1);
        assert!(game.has_shootout());

        let car = tally_period_goals(&game.goals, "CAR");
        assert_eq!(car.regulation, [1, 0, 0]);
        assert_eq!(car.shootout, 2);
    }

    #[test]
    fn test_team_stats_lookups() {
        let json = r#"{
            "records": { "TOR": { "wins": 41, "losses": 30, "ot": 11 } },
            "streaks": { "TOR": { "type": "WINS", "count": 5 }, "MTL": null },
            "standings": { "TOR": { "divisionRank": "2", "leagueRank": "9", "pointsFromPlayoffSpot": "+4" } },
            "playoffSeries": { "round": 1, "wins": { "TOR": 3, "MTL": 2 } }
        }"#;
        let stats: TeamStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.record("TOR").map(|r| r.ot), Some(Some(11)));
        assert_eq!(stats.streak("TOR").map(|s| s.count), Some(5));
        assert_eq!(stats.streak("MTL"), None);
        assert_eq!(stats.standing("TOR").map(|s| s.league_rank.as_str()), Some("9"));
        assert_eq!(stats.series_wins("MTL"), Some(2));
    }

    #[test]
    fn test_logo_fragment() {
        let team = Team {
            abbreviation: "TOR".to_string(),
            id: Some(10),
            location_name: None,
            short_name: None,
            team_name: None,
        };
        assert_eq!(team.logo_fragment("20242025"), Some("team-10-20242025-dark".to_string()));
    }
}
