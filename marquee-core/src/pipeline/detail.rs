use std::collections::{BTreeMap, BTreeSet};

use marquee_model::{
    DEFAULT_TITLE_KEY, ENGLISH_LANG_CODE, Language, MovieDetail, MovieId,
};
use tracing::{info, warn};

use crate::error::{Result, StageError};
use crate::providers::{CatalogApi, MovieRecord, PosterImage};

/// Fetch the record and its poster set concurrently and merge them.
///
/// A poster failure degrades to an empty poster map; a record failure
/// fails the stage.
pub async fn fetch_detail(
    catalog: &dyn CatalogApi,
    id: MovieId,
) -> Result<MovieDetail> {
    let (record, images) = futures::join!(
        catalog.get_movie_detail(id),
        catalog.get_movie_images(id)
    );

    let record =
        record.map_err(|source| StageError::MovieNotFound { id, source })?;

    let images = images.unwrap_or_else(|err| {
        warn!(movie_id = %id, error = %err, "poster fetch failed; continuing without posters");
        Vec::new()
    });

    let detail = merge_detail(record, images);
    info!(
        movie_id = %id,
        titles = detail.translations_by_region.len(),
        posters = detail.posters_by_language_code.len(),
        "movie detail resolved"
    );
    Ok(detail)
}

/// Build a [`MovieDetail`] from a record and the posters fetched beside it.
///
/// Each region keeps one title: the first entry written in the region's own
/// language, otherwise the first non-blank entry seen.
pub fn merge_detail(record: MovieRecord, posters: Vec<PosterImage>) -> MovieDetail {
    let canonical_title = if record.title.trim().is_empty() {
        record.original_title.clone()
    } else {
        record.title.clone()
    };

    let mut translations_by_region = BTreeMap::new();
    if !canonical_title.trim().is_empty() {
        translations_by_region
            .insert(DEFAULT_TITLE_KEY.to_string(), canonical_title.clone());
    }
    let mut native_regions = BTreeSet::new();
    for alternate in record.alternate_titles {
        let title = alternate.title.trim();
        let region = alternate.region_code.trim().to_ascii_uppercase();
        if title.is_empty() || region.is_empty() {
            continue;
        }
        if native_regions.contains(&region) {
            continue;
        }
        let native = Language::by_region(&region).is_ok_and(|language| {
            alternate
                .language_code
                .trim()
                .eq_ignore_ascii_case(language.lang_code)
        });
        if native {
            native_regions.insert(region.clone());
            translations_by_region.insert(region, title.to_string());
        } else {
            translations_by_region
                .entry(region)
                .or_insert_with(|| title.to_string());
        }
    }

    let mut posters_by_language_code = BTreeMap::new();
    for poster in posters {
        let Some(code) = poster.language_code else {
            continue;
        };
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() {
            continue;
        }
        posters_by_language_code.entry(code).or_insert(poster.url);
    }
    if let Some(default_poster) = &record.poster_url {
        posters_by_language_code
            .entry(ENGLISH_LANG_CODE.to_string())
            .or_insert_with(|| default_poster.clone());
    }

    MovieDetail {
        id: record.id,
        canonical_title,
        original_title: record.original_title,
        original_language_code: record.original_language.to_ascii_lowercase(),
        release_year: record.release_year,
        default_poster: record.poster_url,
        translations_by_region,
        posters_by_language_code,
    }
}
