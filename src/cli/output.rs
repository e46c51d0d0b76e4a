use anyhow::Result;
use cinefind::SearchOutcome;
use serde_json::json;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	let query = outcome.query.as_deref().unwrap_or("");
	if !outcome.accepted {
		println!("Search cancelled (query: '{query}')");
		return;
	}

	match outcome.selected_movie() {
		Some(movie) => match movie.release_year() {
			Some(year) => println!("{} ({year}) [tmdb:{}]", movie.title, movie.id),
			None => println!("{} [tmdb:{}]", movie.title, movie.id),
		},
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match outcome.selected_movie() {
		Some(movie) => json!({
			"id": movie.id,
			"title": movie.title,
			"release_date": movie.release_date,
			"vote_average": movie.vote_average,
			"overview": movie.overview,
			"poster_url": movie.poster_url(),
			"backdrop_url": movie.backdrop_url(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
