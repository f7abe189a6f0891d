//! # Delirius
//!
//! A Rust client for the public Delirius API: search engines, music and
//! lyrics providers, social-media lookups, image and GIF search,
//! translation, and similar utility endpoints.
//!
//! ## Quick Start
//!
//! All operations live on the [`DeliriusClient`] struct:
//!
//! ```rust,no_run
//! use delirius::DeliriusClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = DeliriusClient::new();
//!
//!     // Search for lyrics by artist and song name
//!     let songs = api.genius_search("Taylor Swift Love Story").await?;
//!     println!("{} results", songs.len());
//!
//!     // Translate text
//!     let translated = api.translate("Hola, bienvenido", "en").await?;
//!     println!("{}", translated.translation);
//!
//!     // Fetch headline stories (defaults to Spanish / Peru)
//!     let news = api.google_news(None, None).await?;
//!     println!("{} headlines", news.data.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Every operation is a single GET request against one of the fixed
//!   Delirius hosts; there is no authentication, retrying, or caching.
//! - Calls are independent and may run concurrently without coordination.
//! - Most operations surface remote failures as [`DeliriusError`]; the
//!   Pinterest search instead logs the failure and completes with `None`.
//!   See [`error`] for the full policy.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::DeliriusClient;
pub use endpoints::Hosts;
pub use error::{DeliriusError, Result};
