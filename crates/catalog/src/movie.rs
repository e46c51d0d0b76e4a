//! Movie records as returned by the TMDB search endpoint.

use serde::{Deserialize, Serialize};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
const BACKDROP_BASE: &str = "https://image.tmdb.org/t/p/original";

/// Shown when a movie has no usable poster path.
pub const FALLBACK_POSTER: &str = "https://placehold.co/500x750?text=No+Poster";
/// Shown when a movie has no usable backdrop path.
pub const FALLBACK_BACKDROP: &str = "https://placehold.co/1200x675?text=No+Image";

/// A single movie search result. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
	pub id: u64,
	pub title: String,
	#[serde(default)]
	pub poster_path: Option<String>,
	#[serde(default)]
	pub overview: String,
	#[serde(default)]
	pub release_date: String,
	#[serde(default)]
	pub vote_average: Option<f64>,
	#[serde(default)]
	pub backdrop_path: Option<String>,
}

impl Movie {
	/// Full poster URL, or the static placeholder when the path is missing.
	#[must_use]
	pub fn poster_url(&self) -> String {
		artwork_url(POSTER_BASE, self.poster_path.as_deref(), FALLBACK_POSTER)
	}

	/// Full backdrop URL, or the static placeholder when the path is missing.
	#[must_use]
	pub fn backdrop_url(&self) -> String {
		artwork_url(BACKDROP_BASE, self.backdrop_path.as_deref(), FALLBACK_BACKDROP)
	}

	/// Rating on TMDB's ten point scale, e.g. `7.3/10`, or `N/A`.
	#[must_use]
	pub fn rating_label(&self) -> String {
		match self.vote_average {
			Some(rating) if rating.is_finite() => format!("{rating:.1}/10"),
			_ => "N/A".to_string(),
		}
	}

	/// Release date as reported, or an em dash when unknown.
	#[must_use]
	pub fn release_label(&self) -> &str {
		let date = self.release_date.trim();
		if date.is_empty() { "—" } else { date }
	}

	/// Four digit release year when the date carries one.
	#[must_use]
	pub fn release_year(&self) -> Option<&str> {
		let year = self.release_date.trim().get(..4)?;
		year.chars().all(|c| c.is_ascii_digit()).then_some(year)
	}
}

fn artwork_url(base: &str, path: Option<&str>, fallback: &str) -> String {
	match path.map(str::trim) {
		Some(path) if !path.is_empty() => format!("{base}{path}"),
		_ => fallback.to_string(),
	}
}

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoviePage {
	#[serde(default)]
	pub page: u32,
	pub results: Vec<Movie>,
	#[serde(default)]
	pub total_pages: u32,
	#[serde(default)]
	pub total_results: u32,
}

impl MoviePage {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.results.len()
	}
}
