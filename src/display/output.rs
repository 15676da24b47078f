use crate::api::models::{ChampionRotation, MatchDto, ParticipantDto};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

pub const FORBIDDEN_MESSAGE: &str = "Forbidden: check if your API key is valid or expired.";
pub const MATCH_NOT_FOUND_MESSAGE: &str =
    "Match not found: no match with that ID on this routing region.";

#[derive(Tabled)]
struct ParticipantRow {
    #[tabled(rename = "#")]
    number: String,
    name: String,
    champion: String,
    level: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "CS")]
    minions: String,
    gold: String,
    team: String,
}

impl ParticipantRow {
    fn from_participant(number: usize, p: &ParticipantDto) -> Self {
        ParticipantRow {
            number: format!("{}", number),
            name: p.display_name().to_string(),
            champion: p.champion_name.clone().unwrap_or_else(|| "Unknown".to_string()),
            level: num_or_na(p.champ_level),
            kda: format!("{}/{}/{}", p.kills, p.deaths, p.assists),
            minions: format!("{}", p.total_minions_killed),
            gold: format!("{}", p.gold_earned),
            team: num_or_na(p.team_id),
        }
    }
}

fn text_or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

fn num_or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

pub fn render_rotation(rotation: &ChampionRotation) -> String {
    format!(
        "Free Champion Rotation\nFree Champions for All Players: {:?}\nFree Champions for New Players (level {} or less): {:?}\n",
        rotation.free_champion_ids,
        rotation.max_new_player_level,
        rotation.free_champion_ids_for_new_players
    )
}

pub fn render_match(m: &MatchDto) -> String {
    let duration = m
        .info
        .game_duration
        .map(|secs| format!("{}s", secs))
        .unwrap_or_else(|| "N/A".to_string());

    let mut lines = vec![
        format!("Match ID:  {}", text_or_na(&m.metadata.match_id)),
        format!("Duration:  {}", duration),
        format!("Mode:      {}", text_or_na(&m.info.game_mode)),
        format!("Type:      {}", text_or_na(&m.info.game_type)),
        format!("Map ID:    {}", num_or_na(m.info.map_id)),
        format!("Queue ID:  {}", num_or_na(m.info.queue_id)),
        format!("Version:   {}", text_or_na(&m.info.game_version)),
        String::new(),
        format!("Participants ({}):", m.info.participants.len()),
    ];

    if !m.info.participants.is_empty() {
        let rows: Vec<ParticipantRow> = m
            .info
            .participants
            .iter()
            .enumerate()
            .map(|(idx, p)| ParticipantRow::from_participant(idx + 1, p))
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        lines.push(table.to_string());
    }

    lines.join("\n") + "\n"
}

pub fn display_rotation(rotation: &ChampionRotation) {
    println!("\n{}", "🎮 FREE CHAMPION ROTATION".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
    print!("{}", render_rotation(rotation));
}

pub fn display_match(m: &MatchDto) {
    println!("\n{}", "📊 MATCH REPORT".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
    print!("{}", render_match(m));
}

pub fn display_forbidden() {
    println!("{}", FORBIDDEN_MESSAGE.yellow());
}

pub fn display_match_not_found() {
    println!("{}", MATCH_NOT_FOUND_MESSAGE.yellow());
}

pub fn display_api_error(status: u16, body: &str) {
    println!("Error {}: {}", status, body);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}
