use std::io::{self, Write};

use marquee_core::{Session, UiStrings};
use marquee_model::{
    CandidateMovie, DisplayModel, LANGUAGES, Language, MovieId,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    source: &'static Language,
    target: &'static Language,
    candidates: &'a [CandidateMovie],
    has_more: bool,
    selected: Option<MovieId>,
    display: Option<&'a DisplayModel>,
}

pub fn print_languages(json: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, LANGUAGES)?;
        writeln!(out)?;
        return Ok(());
    }

    for language in LANGUAGES {
        writeln!(
            out,
            "{:<4} {:<4} {} ({})",
            language.region_code,
            language.lang_code,
            language.display_name,
            language.english_name
        )?;
    }
    Ok(())
}

pub fn print_search(session: &Session, json: bool) -> anyhow::Result<()> {
    let state = session.state();
    let mut out = io::stdout().lock();

    if json {
        let report = SearchReport {
            query: state.query(),
            source: state.source(),
            target: state.target(),
            candidates: state.visible_candidates(),
            has_more: state.has_more(),
            selected: state.selected(),
            display: session.display(),
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(display) = session.display() {
        write_display(&mut out, session, display)?;
        return Ok(());
    }

    if let Some(status) = session.status_text() {
        writeln!(out, "{status}")?;
        return Ok(());
    }

    let candidates = state.visible_candidates();

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.release_year.is_empty() {
            writeln!(out, "{:>3}. {}", index + 1, candidate.title)?;
        } else {
            writeln!(
                out,
                "{:>3}. {} ({})",
                index + 1,
                candidate.title,
                candidate.release_year
            )?;
        }
    }
    if state.has_more() {
        writeln!(
            out,
            "     ... {} more (use --more)",
            state.candidates().len() - candidates.len()
        )?;
    }
    Ok(())
}

fn write_display(
    out: &mut impl Write,
    session: &Session,
    display: &DisplayModel,
) -> io::Result<()> {
    let state = session.state();
    let strings: &UiStrings = session.strings();

    let year = display
        .original_year
        .as_deref()
        .map(|year| format!(" ({year})"))
        .unwrap_or_default();
    writeln!(
        out,
        "{:<4} {}{}",
        state.source().region_code,
        display.original_title,
        year
    )?;
    writeln!(
        out,
        "     poster: {}",
        display.original_poster.as_deref().unwrap_or(strings.no_poster())
    )?;

    writeln!(
        out,
        "{:<4} {}",
        state.target().region_code,
        display.translated_title
    )?;
    if display.translated_title_found {
        writeln!(
            out,
            "     poster: {}",
            display
                .translated_poster
                .as_deref()
                .unwrap_or(strings.no_poster())
        )?;
    }
    if let Some(hint) = &display.back_translation_hint {
        writeln!(out, "     \"{hint}\"")?;
    }
    Ok(())
}
