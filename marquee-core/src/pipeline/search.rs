use std::cmp::Reverse;
use std::collections::HashSet;

use marquee_model::{CandidateMovie, Language};
use ordered_float::OrderedFloat;
use tracing::{debug, info, warn};

use crate::error::{Result, StageError};
use crate::providers::{CatalogApi, SearchHit};

/// Search the catalog, surfacing why nothing came back.
///
/// Pages are fetched until `page_size` hits are collected or the catalog
/// runs out. A failure after the first page keeps what was gathered.
pub async fn search_catalog(
    catalog: &dyn CatalogApi,
    text: &str,
    source: &Language,
    page_size: usize,
) -> Result<Vec<CandidateMovie>> {
    let query = text.trim();
    if query.is_empty() {
        return Err(StageError::NoCandidates {
            query: String::new(),
            cause: None,
        });
    }

    let locale = source.locale_hint();
    let mut seen = HashSet::new();
    let mut hits = Vec::new();
    let mut page = 1;

    loop {
        match catalog.search_movies(query, &locale, page).await {
            Ok(result) => {
                let exhausted = result.hits.is_empty();
                hits.extend(
                    result.hits.into_iter().filter(|hit| seen.insert(hit.id)),
                );
                if exhausted
                    || hits.len() >= page_size
                    || page >= result.total_pages
                {
                    break;
                }
                page += 1;
            }
            Err(cause) if page == 1 => {
                return Err(StageError::NoCandidates {
                    query: query.to_string(),
                    cause: Some(cause),
                });
            }
            Err(err) => {
                warn!(query, page, error = %err, "search page failed; keeping earlier pages");
                break;
            }
        }
    }

    let candidates = rank_hits(hits, page_size);
    if candidates.is_empty() {
        return Err(StageError::NoCandidates {
            query: query.to_string(),
            cause: None,
        });
    }

    info!(query, locale = %locale, count = candidates.len(), "catalog search complete");
    Ok(candidates)
}

/// Search stage as seen by the session: an empty list is the valid
/// "no matches yet" state, never an error.
pub async fn search_candidates(
    catalog: &dyn CatalogApi,
    text: &str,
    source: &Language,
    page_size: usize,
) -> Vec<CandidateMovie> {
    match search_catalog(catalog, text, source, page_size).await {
        Ok(candidates) => candidates,
        Err(StageError::NoCandidates {
            query,
            cause: Some(cause),
        }) => {
            warn!(query = %query, error = %cause, "catalog search failed");
            Vec::new()
        }
        Err(err) => {
            debug!(error = %err, "catalog search returned nothing");
            Vec::new()
        }
    }
}

/// Popularity descending; equal scores keep catalog order.
pub fn rank_hits(mut hits: Vec<SearchHit>, page_size: usize) -> Vec<CandidateMovie> {
    hits.sort_by_key(|hit| {
        let score = if hit.popularity.is_finite() {
            hit.popularity
        } else {
            0.0
        };
        Reverse(OrderedFloat(score))
    });
    hits.truncate(page_size);

    hits.into_iter()
        .map(|hit| CandidateMovie {
            id: hit.id,
            title: hit.title,
            release_year: hit.release_year,
            poster_url: hit.poster_url,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::MovieId;

    fn hit(id: u64, popularity: f64) -> SearchHit {
        SearchHit {
            id: MovieId(id),
            title: format!("Movie {id}"),
            release_year: "2001".into(),
            poster_url: None,
            popularity,
        }
    }

    #[test]
    fn ranking_is_stable_for_equal_scores() {
        let ranked = rank_hits(
            vec![hit(1, 5.0), hit(2, 9.0), hit(3, 5.0), hit(4, 5.0)],
            20,
        );
        let ids: Vec<u64> = ranked.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn ranking_caps_at_page_size() {
        let hits = (0..30).map(|i| hit(i, i as f64)).collect();
        let ranked = rank_hits(hits, 20);
        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0].id, MovieId(29));
    }

    #[test]
    fn non_finite_popularity_sorts_as_zero() {
        let ranked = rank_hits(vec![hit(1, f64::NAN), hit(2, 0.5)], 20);
        assert_eq!(ranked[0].id, MovieId(2));
    }
}
