// src/enrichment/mod.rs
// The text-enrichment pipeline: turns untrusted, loosely-formatted generated
// text into a structured, link-augmented reply. Tolerates partial upstream
// failure; a single lookup failing never fails the whole request.
//
// Marker grammar (versioned contract with the prompt templates):
//   song lines   🎵 <title> - <rationale>
//   food lines   🍽️ <name> - <rationale>
//   movie lines  🎬 <title> - <rationale>
// Non-conforming lines are skipped. Extraction never fails on any input;
// the empty string produces empty lists and unchanged text.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::adapters::tmdb::MovieInfo;
use crate::prompt::Mode;

lazy_static! {
    static ref SONG_RE: Regex = Regex::new(r"🎵\s*(.+?)\s*-").unwrap();
    static ref FOOD_RE: Regex = Regex::new(r"🍽️\s*(.+?)\s*-").unwrap();
    static ref MOVIE_RE: Regex = Regex::new(r"🎬\s*(.+?)\s*-\s*.+").unwrap();
}

/// Video-search seam: resolves a song title to a watch URL, or a sentinel
/// "no link" value when nothing could be resolved.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn first_video_url(&self, title: &str) -> String;
}

/// Movie-metadata seam: resolves a film title to a metadata record, or None
/// on a miss or failure (misses are dropped silently from the reply).
#[async_trait]
pub trait MovieSearch: Send + Sync {
    async fn search(&self, title: &str) -> Option<MovieInfo>;
}

#[derive(Debug, Clone, Serialize)]
pub struct SongLink {
    pub title: String,
    pub youtube: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct EnrichedReply {
    pub reply: String,
    pub songs: Vec<SongLink>,
    pub foods: Vec<FoodItem>,
    pub movies: Vec<MovieInfo>,
}

pub struct EnrichmentPipeline<'a> {
    video: &'a dyn VideoSearch,
    movie: &'a dyn MovieSearch,
}

impl<'a> EnrichmentPipeline<'a> {
    pub fn new(video: &'a dyn VideoSearch, movie: &'a dyn MovieSearch) -> Self {
        Self { video, movie }
    }

    /// Consumes raw model text once and produces the enriched reply.
    /// Not re-entrant: running it over its own output is unsupported.
    ///
    /// Category order is fixed (song, food, movie) and within a category
    /// titles are processed in first-occurrence document order; the rewrite
    /// touches only the first textual occurrence of each distinct title, so
    /// repeats past the first stay plain text. Every list, songs included,
    /// carries one entry per distinct title.
    pub async fn run(&self, raw_text: &str, mode: Mode) -> EnrichedReply {
        let mut reply = raw_text.to_string();

        let mut songs = Vec::new();
        for title in extract_distinct(&SONG_RE, raw_text) {
            let url = self.video.first_video_url(&title).await;
            reply = rewrite_first_occurrence(&reply, &title, &url);
            songs.push(SongLink {
                title,
                youtube: url,
            });
        }

        let foods = extract_distinct(&FOOD_RE, &reply)
            .into_iter()
            .map(|name| FoodItem { name })
            .collect();

        // Titles are extracted regardless of mode (the model may disobey its
        // template) but lookups and the result list are mode-gated.
        let movie_titles = extract_distinct(&MOVIE_RE, raw_text);
        let mut movies = Vec::new();
        if mode.includes_movies() {
            for title in movie_titles {
                if let Some(info) = self.movie.search(&title).await {
                    movies.push(info);
                }
            }
        }

        EnrichedReply {
            reply,
            songs,
            foods,
            movies,
        }
    }
}

/// Distinct capture-group matches in first-occurrence order.
fn extract_distinct(re: &Regex, text: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for caps in re.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            let title = m.as_str().to_string();
            if !titles.contains(&title) {
                titles.push(title);
            }
        }
    }
    titles
}

/// Wraps the first occurrence of `title` after a song marker into an anchor,
/// preserving the marker and separator around it. Later occurrences of the
/// same title are left untouched.
fn rewrite_first_occurrence(text: &str, title: &str, url: &str) -> String {
    let pattern = format!(r"(🎵\s*){}(\s*-)", regex::escape(title));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        // Cannot happen for escaped input; keep the text unchanged if it does.
        Err(_) => return text.to_string(),
    };

    re.replace(text, |caps: &regex::Captures| {
        format!(
            "{}<a href='{}' target='_blank' rel='noopener'>{}</a>{}",
            &caps[1], url, title, &caps[2]
        )
    })
    .into_owned()
}
