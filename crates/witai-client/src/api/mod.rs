//! API endpoint implementations.

mod entities;
mod intents;
mod language;
mod message;

pub use entities::EntitiesApi;
pub use intents::IntentsApi;
pub use language::{DetectLocaleQuery, LanguageApi};
pub use message::{MessageApi, MessageQuery};
