// src/adapters/mod.rs
// One thin reqwest client per external API. Each adapter owns its key and a
// bounded-timeout client; per-item lookups degrade to an "unavailable" value
// instead of propagating errors.

pub mod gemini;
pub mod places;
pub mod tmdb;
pub mod weather;
pub mod youtube;

pub use gemini::GeminiClient;
pub use places::{PlacesClient, Restaurant};
pub use tmdb::{MovieInfo, TmdbClient};
pub use weather::{WeatherClient, WeatherSnapshot};
pub use youtube::{YoutubeClient, NO_LINK};
