//! Nearby search use case and result rendering

use std::fmt::{self, Write as _};
use std::sync::Arc;

use domain::NearbyPlace;
use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::ports::MappingPort;

/// Number of results printed unless the caller asks for more
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Keyword operator meaning "any of"
pub const KEYWORD_OR: &str = ";";

/// Join several keyword arguments into one OR query
#[must_use]
pub fn join_keywords<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(KEYWORD_OR)
}

/// Service for keyword searches around a reference point
pub struct NearbyService {
    mapping: Arc<dyn MappingPort>,
}

impl fmt::Debug for NearbyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NearbyService").finish_non_exhaustive()
    }
}

impl NearbyService {
    /// Create a new nearby service
    pub fn new(mapping: Arc<dyn MappingPort>) -> Self {
        Self { mapping }
    }

    /// Search for places matching any of `keywords` around `ref_location`
    ///
    /// # Errors
    ///
    /// `InvalidInput` when no usable keyword or location is given, otherwise
    /// whatever the provider reports.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        keywords: &[String],
        ref_location: &str,
    ) -> Result<Vec<NearbyPlace>, ApplicationError> {
        let query = join_keywords(keywords);
        if query.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "at least one keyword is required".to_string(),
            ));
        }

        let ref_location = ref_location.trim();
        if ref_location.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "reference location cannot be empty".to_string(),
            ));
        }

        let places = self.mapping.nearby_search(&query, ref_location).await?;
        info!(count = places.len(), "Nearby search finished");
        Ok(places)
    }
}

/// Render search results, showing at most `limit` places in received order
#[must_use]
pub fn format_nearby_places(places: &[NearbyPlace], limit: usize) -> String {
    if places.is_empty() {
        return "No places found".to_string();
    }

    let shown = places.len().min(limit.max(1));
    let mut out = format!("Found {} places (showing top {shown}):\n", places.len());

    for (index, place) in places.iter().take(shown).enumerate() {
        let _ = writeln!(out, "\n{}. {}", index + 1, place.name);
        let _ = writeln!(out, "   Address: {}", place.display_address());
        let _ = writeln!(out, "   Distance: {} m", place.distance_meters);
        if let Some(phone) = &place.phone {
            let _ = writeln!(out, "   Phone: {phone}");
        }
        if let Some(email) = &place.email {
            let _ = writeln!(out, "   Email: {email}");
        }
    }

    out
}
