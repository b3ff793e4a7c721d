use crate::config::DisplayConfig;
use crate::types::{
    GameProgress, Goal, Period, Record, Scorer, Streak, StreakType, Strength, REGULATION_PERIODS,
};
use chrono::{DateTime, Local};

/// Names longer than this are shortened to initials plus last name
pub const MAX_NAME_LENGTH: usize = 20;

/// Placeholder for values that cannot be computed
pub const PLACEHOLDER: &str = "-";

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub cross: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            cross: "┼".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            cross: "+".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Shorten long player names: "Jean-Pierre Dumont-Lavigne Smith" -> "J.-P. D.-L. Smith"
///
/// Every space-separated token except the last is reduced to its initials,
/// keeping hyphenated parts joined by hyphens.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_LENGTH {
        return name.to_string();
    }

    let tokens: Vec<&str> = name.split(' ').filter(|t| !t.is_empty()).collect();
    let Some((last, rest)) = tokens.split_last() else {
        return name.to_string();
    };

    let mut parts: Vec<String> = rest.iter().map(|token| initials(token)).collect();
    parts.push((*last).to_string());
    parts.join(" ")
}

fn initials(token: &str) -> String {
    token
        .split('-')
        .filter_map(|part| part.chars().next())
        .map(|c| format!("{}.", c))
        .collect::<Vec<_>>()
        .join("-")
}

/// Points earned over points available; NaN for a record with no games
pub fn points_percentage(record: &Record) -> f64 {
    let ot = record.ot.unwrap_or(0);
    let points = 2 * record.wins + ot;
    let max_points = 2 * (record.wins + record.losses + ot);
    f64::from(points) / f64::from(max_points)
}

/// Three-decimal points percentage, "-" when undefined
pub fn format_win_percentage(record: &Record) -> String {
    let pct = points_percentage(record);
    if pct.is_nan() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.3}", pct)
}

/// "41-30-11", or "41-30" when the record has no overtime column
pub fn format_record(record: &Record) -> String {
    match record.ot {
        Some(ot) => format!("{}-{}-{}", record.wins, record.losses, ot),
        None => format!("{}-{}", record.wins, record.losses),
    }
}

pub fn format_streak(streak: Option<&Streak>) -> String {
    match streak {
        Some(s) => {
            let prefix = match s.kind {
                StreakType::Wins => "W",
                StreakType::Losses => "L",
                StreakType::Ot => "OT",
            };
            format!("{}{}", prefix, s.count)
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Progress line for a live game: "2nd 08:42", "End of 2nd", "2nd Intermission"
pub fn format_time_remaining(progress: &GameProgress) -> String {
    let ordinal = &progress.current_period_ordinal;
    let remaining = &progress.current_period_time_remaining;
    if progress.is_intermission {
        format!("{} Intermission", ordinal)
    } else if ordinal == "SO" {
        // the shootout clock sits at 00:00
        ordinal.clone()
    } else if remaining.min == 0 && remaining.sec == 0 {
        format!("End of {}", ordinal)
    } else {
        format!("{} {}", ordinal, remaining.pretty)
    }
}

/// Ordinal label of a period number: 1st, 2nd, 3rd, OT, 2OT
pub fn period_ordinal(number: u8) -> String {
    match number {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        4 => "OT".to_string(),
        n => format!("{}OT", n.saturating_sub(3)),
    }
}

/// "MM:SS" clock text
pub fn format_clock(min: u32, sec: u32) -> String {
    format!("{:02}:{:02}", min, sec)
}

/// Goal time as shown in the goal list: "1st 05:12", "OT 02:01", "SO"
pub fn format_goal_time(goal: &Goal) -> String {
    match goal {
        Goal::InPlay { period, min, sec, .. } => {
            format!("{} {}", period_label(*period), format_clock(*min, *sec))
        }
        Goal::Shootout { .. } => "SO".to_string(),
    }
}

/// Ordinal label of a parsed period
pub fn period_label(period: Period) -> String {
    match period {
        Period::Regular(n) => period_ordinal(n),
        Period::Overtime(n) => period_ordinal(REGULATION_PERIODS + n),
        Period::Shootout => "SO".to_string(),
    }
}

/// "Auston Matthews (12)" with the name shortened when needed
pub fn format_scorer(scorer: &Scorer) -> String {
    let name = truncate_name(&scorer.player);
    match scorer.season_total {
        Some(total) => format!("{} ({})", name, total),
        None => name,
    }
}

/// Assist line for an in-play goal; None for shootout goals
pub fn format_assists(goal: &Goal) -> Option<String> {
    match goal {
        Goal::InPlay { assists, .. } if assists.is_empty() => Some("Unassisted".to_string()),
        Goal::InPlay { assists, .. } => Some(
            assists
                .iter()
                .map(format_scorer)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Goal::Shootout { .. } => None,
    }
}

/// Strength and empty-net tags: "PPG", "SHG", "EN", "PPG, EN"
pub fn format_goal_tags(goal: &Goal) -> Option<String> {
    let Goal::InPlay { strength, empty_net, .. } = goal else {
        return None;
    };
    let mut tags = Vec::new();
    match strength {
        Some(Strength::PowerPlay) => tags.push("PPG"),
        Some(Strength::ShortHanded) => tags.push("SHG"),
        None => {}
    }
    if *empty_net {
        tags.push("EN");
    }
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(", "))
    }
}

/// Local start time of a game using the configured strftime pattern
pub fn format_start_time(start_time: &str, time_format: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(start_time).ok()?;
    Some(parsed.with_timezone(&Local).format(time_format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeRemaining;

    fn progress(ordinal: &str, min: u32, sec: u32, intermission: bool) -> GameProgress {
        GameProgress {
            current_period: 2,
            current_period_ordinal: ordinal.to_string(),
            current_period_time_remaining: TimeRemaining {
                pretty: format_clock(min, sec),
                min,
                sec,
            },
            is_intermission: intermission,
        }
    }

    fn in_play(assists: Vec<Scorer>, strength: Option<Strength>, empty_net: bool) -> Goal {
        Goal::InPlay {
            period: Period::Regular(1),
            min: 5,
            sec: 12,
            scorer: Scorer { player: "Auston Matthews".to_string(), season_total: Some(12) },
            assists,
            team: "TOR".to_string(),
            strength,
            empty_net,
        }
    }

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_truncate_name_short_names_unchanged() {
        assert_eq!(truncate_name("Auston Matthews"), "Auston Matthews");
        // exactly 20 characters
        assert_eq!(truncate_name("Abcdefghij Klmnopqrs"), "Abcdefghij Klmnopqrs");
    }

    #[test]
    fn test_truncate_name_long_names() {
        assert_eq!(truncate_name("Jean-Pierre Dumont-Lavigne Smith"), "J.-P. D.-L. Smith");
        assert_eq!(truncate_name("Oliver Ekman-Larsson Jr."), "O. E.-L. Jr.");
        assert_eq!(truncate_name("Maximilianus Vandersteenhoven"), "M. Vandersteenhoven");
    }

    #[test]
    fn test_truncate_name_single_long_token() {
        let name = "Abcdefghijklmnopqrstuvwxyz";
        assert_eq!(truncate_name(name), name);
    }

    #[test]
    fn test_win_percentage() {
        let record = Record { wins: 41, losses: 30, ot: Some(11) };
        assert_eq!(format_win_percentage(&record), "0.567");

        let perfect = Record { wins: 10, losses: 0, ot: Some(0) };
        assert_eq!(format_win_percentage(&perfect), "1.000");

        let empty = Record { wins: 0, losses: 0, ot: None };
        assert!(points_percentage(&empty).is_nan());
        assert_eq!(format_win_percentage(&empty), "-");
    }

    #[test]
    fn test_format_record() {
        assert_eq!(format_record(&Record { wins: 41, losses: 30, ot: Some(11) }), "41-30-11");
        assert_eq!(format_record(&Record { wins: 3, losses: 2, ot: None }), "3-2");
    }

    #[test]
    fn test_format_streak() {
        let wins = Streak { kind: StreakType::Wins, count: 5 };
        let ot = Streak { kind: StreakType::Ot, count: 1 };
        assert_eq!(format_streak(Some(&wins)), "W5");
        assert_eq!(format_streak(Some(&ot)), "OT1");
        assert_eq!(format_streak(None), "-");
    }

    #[test]
    fn test_format_time_remaining() {
        assert_eq!(format_time_remaining(&progress("2nd", 8, 42, false)), "2nd 08:42");
        assert_eq!(format_time_remaining(&progress("2nd", 0, 0, false)), "End of 2nd");
        assert_eq!(format_time_remaining(&progress("1st", 0, 0, true)), "1st Intermission");
        assert_eq!(format_time_remaining(&progress("SO", 3, 0, false)), "SO");
        assert_eq!(format_time_remaining(&progress("SO", 0, 0, false)), "SO");
    }

    #[test]
    fn test_period_ordinal() {
        assert_eq!(period_ordinal(1), "1st");
        assert_eq!(period_ordinal(3), "3rd");
        assert_eq!(period_ordinal(4), "OT");
        assert_eq!(period_ordinal(6), "3OT");
        assert_eq!(period_label(Period::Overtime(2)), "2OT");
        assert_eq!(period_label(Period::Shootout), "SO");
    }

    #[test]
    fn test_goal_description_fragments() {
        let assisted = in_play(
            vec![
                Scorer { player: "Mitch Marner".to_string(), season_total: Some(20) },
                Scorer { player: "Morgan Rielly".to_string(), season_total: None },
            ],
            Some(Strength::PowerPlay),
            true,
        );
        assert_eq!(format_goal_time(&assisted), "1st 05:12");
        assert_eq!(format_scorer(assisted.scorer()), "Auston Matthews (12)");
        assert_eq!(format_assists(&assisted).as_deref(), Some("Mitch Marner (20), Morgan Rielly"));
        assert_eq!(format_goal_tags(&assisted).as_deref(), Some("PPG, EN"));

        let plain = in_play(vec![], None, false);
        assert_eq!(format_assists(&plain).as_deref(), Some("Unassisted"));
        assert_eq!(format_goal_tags(&plain), None);

        let shootout = Goal::Shootout {
            scorer: Scorer { player: "Cole Caufield".to_string(), season_total: None },
            team: "MTL".to_string(),
        };
        assert_eq!(format_goal_time(&shootout), "SO");
        assert_eq!(format_assists(&shootout), None);
        assert_eq!(format_goal_tags(&shootout), None);
    }

    #[test]
    fn test_format_start_time_invalid() {
        assert_eq!(format_start_time("not a date", "%H:%M"), None);
        assert!(format_start_time("2024-11-21T00:00:00Z", "%H:%M").is_some());
    }
}
