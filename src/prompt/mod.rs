// src/prompt/mod.rs
// Prompt construction: one fixed Japanese template per mode, with optional
// MBTI and weather clauses prepended. Pure string composition, cannot fail.

use crate::adapters::WeatherSnapshot;

/// Personality tag value meaning "unknown"; compared case-insensitively and
/// suppressed from the prompt.
pub const UNKNOWN_MBTI: &str = "わからない";

/// Recommendation mode. Unrecognized strings fall back to Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playlist,
    Movie,
    Food,
    Normal,
}

impl Mode {
    pub fn parse(s: &str) -> Self {
        match s {
            "playlist" => Mode::Playlist,
            "movie" => Mode::Movie,
            "food" => Mode::Food,
            _ => Mode::Normal,
        }
    }

    /// Movie metadata is attached to the reply only for these modes.
    pub fn includes_movies(&self) -> bool {
        matches!(self, Mode::Movie | Mode::Normal)
    }
}

pub fn build_prompt(
    mood: &str,
    mode: Mode,
    mbti: Option<&str>,
    weather: Option<&WeatherSnapshot>,
) -> String {
    let mbti_text = match mbti {
        Some(tag) if !tag.is_empty() && tag.to_lowercase() != UNKNOWN_MBTI => {
            format!(" ユーザーのMBTIタイプは {} です。MBTIの性格傾向も考慮して、", tag)
        }
        _ => String::new(),
    };

    let weather_text = match weather {
        Some(w) => format!(
            " 現在の天気は「{}」、気温は{}℃です。天気や気温も考慮して、",
            w.description, w.temp_c
        ),
        None => String::new(),
    };

    let body = match mode {
        Mode::Playlist => format!(
            "今の気分は「{}」です。この気分にぴったりの日本の曲を10曲、1行ずつ「🎵 曲名 - 理由」の形式で出力してください。",
            mood
        ),
        Mode::Movie => format!(
            "今の気分は「{}」です。この気分に合う名作の海外と日本の映画を5つ、1行ずつ「🎬 映画名 - 理由」の形式で出力してください。",
            mood
        ),
        Mode::Food => format!(
            "今の気分は「{}」です。この気分に合った食の選択肢を、料理・外食・コンビニ商品の中から5つ提案してください。それぞれ「🍽️ 食事名 - 理由 - 主な栄養素（例：たんぱく質、炭水化物、ビタミンC）」の形式で出力してください。料理が向かない気分のときは、外食やコンビニを優先して構いません。",
            mood
        ),
        Mode::Normal => format!(
            "今の気分は「{}」です。これに合う日本の曲を3つ、1行ずつ「🎵 曲名 - 理由」の形式で出力してください。次に、その気分にあう日本の映画を3つ、1行ずつ「🎬 映画名 - 理由」の形式で出力してください。最後に、今の気分にあう食事を3つ、1行ずつ「🍽️ 食事名 - 理由」の形式で出力してください。",
            mood
        ),
    };

    format!("{}{}{}", mbti_text, weather_text, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_falls_back_to_normal() {
        assert_eq!(Mode::parse("playlist"), Mode::Playlist);
        assert_eq!(Mode::parse("karaoke"), Mode::Normal);
        assert_eq!(Mode::parse(""), Mode::Normal);
    }

    #[test]
    fn weather_clause_omitted_when_snapshot_absent() {
        let prompt = build_prompt("元気", Mode::Playlist, None, None);
        assert!(!prompt.contains("現在の天気"));
        assert!(prompt.contains("「元気」"));
        assert!(prompt.contains("10曲"));
    }

    #[test]
    fn weather_clause_present_with_snapshot() {
        let snapshot = WeatherSnapshot {
            description: "晴れ".to_string(),
            temp_c: 23.5,
        };
        let prompt = build_prompt("のんびり", Mode::Food, None, Some(&snapshot));
        assert!(prompt.contains("「晴れ」"));
        assert!(prompt.contains("23.5℃"));
    }

    #[test]
    fn mbti_clause_suppressed_for_unknown_sentinel() {
        let with_tag = build_prompt("元気", Mode::Normal, Some("ENFP"), None);
        assert!(with_tag.contains("ENFP"));

        let unknown = build_prompt("元気", Mode::Normal, Some(UNKNOWN_MBTI), None);
        assert!(!unknown.contains("MBTI"));

        let empty = build_prompt("元気", Mode::Normal, Some(""), None);
        assert!(!empty.contains("MBTI"));
    }
}
