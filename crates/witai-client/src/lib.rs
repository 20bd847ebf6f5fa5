//! Async HTTP client for the Wit.ai natural language API.
//!
//! This crate provides a typed client for sending messages, detecting
//! languages, and managing the intents and entities of a Wit app.
//!
//! # Example
//!
//! ```no_run
//! use witai_client::{WitClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = WitClient::builder()
//!     .auth_token("server-access-token")
//!     .build()?;
//!
//! // Understand an utterance
//! let message = client.message().send("Book a flight to Paris").await?;
//! if let Some(intent) = message.top_intent() {
//!     println!("{} ({:.2})", intent.name, intent.confidence);
//! }
//!
//! // Detect the language of some text
//! let detected = client.language().detect_with_max("Bonjour", 3).await?;
//! for locale in &detected.locales {
//!     println!("{}: {}", locale.locale, locale.confidence);
//! }
//!
//! // Manage intents and entities
//! let intent = client.intents().create("Book Flight").await?;
//! let entity = client
//!     .entities()
//!     .create("custom_color", vec!["color".to_string()])
//!     .await?;
//! client.intents().delete(&intent.name).await?;
//! # let _ = entity;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Message**: `GET /message`, typed or raw JSON
//! - **Language**: `GET /language`
//! - **Intents**: list, get, create, delete
//! - **Entities**: list, create
//!
//! Built-in intents and entities (`wit$` names) come back with the prefix
//! stripped and `is_custom == false`; see [`normalize`].

pub mod api;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{ClientBuilder, WitClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use normalize::NameNormalization;
pub use types::*;

pub use api::{DetectLocaleQuery, MessageQuery};
