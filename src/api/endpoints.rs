// URL builders for the two Riot resource families we hit.
// champion-rotations is platform-routed, match-v5 is region-routed.

pub fn champion_rotations_url(platform: &str) -> String {
    format!("https://{}.api.riotgames.com/lol/platform/v3/champion-rotations", platform)
}

pub fn match_url(route: &str, match_id: &str) -> String {
    format!("https://{}.api.riotgames.com/lol/match/v5/matches/{}", route, match_id)
}

pub fn regional_routing(platform: &str) -> &'static str {
    match platform {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "vn2" => "sea",
        _ => "americas", // default
    }
}
