//! # pmoyoutube - YouTube listing client for PMOMusic
//!
//! This crate provides a client for the YouTube Data API v3 together with a
//! resolution engine that turns a free-form query (channel handle, channel
//! or playlist id, video URL, or arbitrary text) into a ranked list of
//! channel uploads, and maps raw records onto generic metadata.
//!
//! ## Architecture
//!
//! The crate follows the layering of the other PMO client crates:
//! - `YouTubeClient`: HTTP transport (endpoints, API key, JSON decoding)
//! - `ListingSource`: the trait seam between transport and engine
//! - `ChannelResolver`: layered fallback strategies and pagination
//! - `SearchGate`: repeat-request gating of expensive full-text searches
//! - `ResultRanker`: similarity-driven ordering of fetched items
//! - `YouTubeService`: metadata-population surface
//!
//! ## Structure des modules
//!
//! ```text
//! pmoyoutube/
//! ├── src/
//! │   ├── lib.rs              # Module principal (ce fichier)
//! │   ├── client.rs           # Client HTTP YouTube
//! │   ├── models.rs           # Structures de données (réponses API)
//! │   ├── source.rs           # Trait ListingSource
//! │   ├── resolver.rs         # Machine à états de résolution
//! │   ├── ranker.rs           # Classement par similarité
//! │   ├── gate.rs             # Garde-fou des recherches coûteuses
//! │   ├── similarity.rs       # Score de similarité
//! │   ├── video_id.rs         # Extraction d'identifiants vidéo
//! │   ├── categories.rs       # Table des genres
//! │   ├── metadata.rs         # Enregistrements de métadonnées
//! │   ├── service.rs          # Surface haut-niveau
//! │   └── error.rs            # Gestion des erreurs
//! ```
//!
//! ## Resolution strategies
//!
//! A query walks through four strategies, each short-circuiting on data:
//! playlist pagination (channel-like terms), handle lookup, video
//! indirection, and finally a gated full-text search. The full-text search
//! is quota-hungry, so it only runs once the identical query is issued
//! twice in a row; the first request arms the gate and returns empty.
//!
//! ## Utilisation
//!
//! ```no_run
//! use pmoyoutube::{YouTubeClient, YouTubeService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YouTubeClient::builder()
//!         .api_key("AIza...")
//!         .build()
//!         .await?;
//!     let service = YouTubeService::new(client);
//!
//!     let results = service.search_show("@somechannel", "en").await;
//!     for record in results {
//!         println!(
//!             "{} - {}",
//!             record.show_title.as_deref().unwrap_or("?"),
//!             record.name.as_deref().unwrap_or("?")
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Gestion des erreurs
//!
//! La crate utilise `thiserror` pour définir des erreurs typées
//! ([`Error`]). Le moteur de résolution ne propage jamais ces erreurs vers
//! l'appelant : toute panne distante est journalisée puis traitée comme une
//! absence de données, et la surface publique renvoie une liste vide.

pub mod categories;
pub mod client;
pub mod error;
pub mod gate;
pub mod metadata;
pub mod models;
pub mod ranker;
pub mod resolver;
pub mod service;
pub mod similarity;
pub mod source;
pub mod video_id;

pub use client::{ChannelLookup, ClientBuilder, SearchKind, YouTubeClient};
pub use error::{Error, Result};
pub use gate::SearchGate;
pub use metadata::{ArtworkKind, ArtworkRef, MediaKind, MetadataRecord};
pub use models::{
    ArtworkShape, ListingItem, ListingResponse, SearchItem, SearchResponse, Snippet, Thumbnails,
};
pub use ranker::ResultRanker;
pub use resolver::ChannelResolver;
pub use service::YouTubeService;
pub use source::ListingSource;
pub use video_id::extract_video_id;
