use serde::Deserialize;

// Champion V3 rotation response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRotation {
    #[serde(default)]
    pub free_champion_ids: Vec<i64>,
    #[serde(default)]
    pub free_champion_ids_for_new_players: Vec<i64>,
    #[serde(default = "default_new_player_level")]
    pub max_new_player_level: i64,
}

fn default_new_player_level() -> i64 {
    10
}

// Match V5 response
#[derive(Debug, Default, Deserialize)]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: MatchMetadata,
    #[serde(default)]
    pub info: MatchInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_duration: Option<i64>,
    pub game_mode: Option<String>,
    pub game_type: Option<String>,
    pub map_id: Option<i32>,
    pub queue_id: Option<i32>,
    pub game_version: Option<String>,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub riot_id_game_name: Option<String>,
    pub summoner_name: Option<String>,
    pub champion_name: Option<String>,
    pub champ_level: Option<i32>,
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub total_minions_killed: i32,
    #[serde(default)]
    pub gold_earned: i32,
    pub team_id: Option<i32>,
}

impl ParticipantDto {
    /// Newer match payloads carry the riot ID, older ones only the
    /// summoner name. Either may be present-but-empty.
    pub fn display_name(&self) -> &str {
        for name in [&self.riot_id_game_name, &self.summoner_name] {
            if let Some(name) = name {
                if !name.is_empty() {
                    return name;
                }
            }
        }
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_fields_default_to_empty_lists() {
        let rotation: ChampionRotation = serde_json::from_str("{}").unwrap();
        assert!(rotation.free_champion_ids.is_empty());
        assert!(rotation.free_champion_ids_for_new_players.is_empty());
        assert_eq!(rotation.max_new_player_level, 10);
    }

    #[test]
    fn rotation_parses_both_lists() {
        let body = r#"{"freeChampionIds": [1, 2, 3], "freeChampionIdsForNewPlayers": [4, 5], "maxNewPlayerLevel": 10}"#;
        let rotation: ChampionRotation = serde_json::from_str(body).unwrap();
        assert_eq!(rotation.free_champion_ids, vec![1, 2, 3]);
        assert_eq!(rotation.free_champion_ids_for_new_players, vec![4, 5]);
    }

    #[test]
    fn match_payload_defaults_when_sections_missing() {
        let m: MatchDto = serde_json::from_str("{}").unwrap();
        assert!(m.metadata.match_id.is_none());
        assert!(m.info.game_duration.is_none());
        assert!(m.info.participants.is_empty());
    }

    #[test]
    fn participant_counts_default_to_zero() {
        let p: ParticipantDto = serde_json::from_str("{}").unwrap();
        assert_eq!(p.kills, 0);
        assert_eq!(p.deaths, 0);
        assert_eq!(p.assists, 0);
        assert_eq!(p.total_minions_killed, 0);
        assert_eq!(p.gold_earned, 0);
        assert_eq!(p.display_name(), "Unknown");
    }

    #[test]
    fn participant_name_prefers_riot_id() {
        let p: ParticipantDto = serde_json::from_str(
            r#"{"riotIdGameName": "Faker", "summonerName": "OldName"}"#,
        )
        .unwrap();
        assert_eq!(p.display_name(), "Faker");

        let p: ParticipantDto =
            serde_json::from_str(r#"{"riotIdGameName": "", "summonerName": "OldName"}"#).unwrap();
        assert_eq!(p.display_name(), "OldName");
    }
}
