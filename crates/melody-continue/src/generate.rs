use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::types::{IntervalProfile, Motif, NoteEvent};
use crate::{pitch, Result};

/// Milliseconds between generated notes, also the fixed note duration.
pub const STEP_MS: u64 = 500;

/// Sliding-window size in notes.
///
/// Fixed at 3 even though mining goes up to 4-note patterns, so a 4-note
/// motif can never match during generation (suffix lengths differ). Kept
/// to match the observed behavior of the system this engine replaces;
/// widening to [`crate::motif::MAX_PATTERN_LEN`] would change output.
pub const WINDOW_LEN: usize = 3;

/// Generate `length` continuation notes from mined motifs and the
/// interval profile.
///
/// Each step tries, in order: the highest-ranked motif whose pattern is a
/// suffix of the current window (emitting its most common next note), a
/// uniformly random interval from the profile, and finally a ±1 chromatic
/// step. Timestamps run from the last input note at [`STEP_MS`] spacing.
///
/// Callers are expected to have validated the input; see
/// [`crate::continue_melody`].
pub fn generate<R: Rng + ?Sized>(
    notes: &[NoteEvent],
    motifs: &[Motif],
    profile: &IntervalProfile,
    length: usize,
    rng: &mut R,
) -> Result<Vec<NoteEvent>> {
    let last = notes.last().ok_or(crate::Error::EmptyInput)?;
    let anchor_ts = last.timestamp;

    let mut window: Vec<String> = notes
        .iter()
        .skip(notes.len().saturating_sub(WINDOW_LEN))
        .map(|n| n.note.clone())
        .collect();

    let mut generated = Vec::with_capacity(length);

    for step in 0..length {
        let symbol = next_symbol(&window, motifs, profile, rng)?;

        debug!(step, note = symbol.as_str(), "generated note");

        generated.push(NoteEvent::new(
            symbol.clone(),
            anchor_ts + (step as u64 + 1) * STEP_MS,
            STEP_MS,
        ));

        window.push(symbol);
        if window.len() > WINDOW_LEN {
            window.remove(0);
        }
    }

    Ok(generated)
}

fn next_symbol<R: Rng + ?Sized>(
    window: &[String],
    motifs: &[Motif],
    profile: &IntervalProfile,
    rng: &mut R,
) -> Result<String> {
    // Motifs in rank order; a pattern matches when it is an exact suffix
    // of the window (unequal lengths never match).
    for motif in motifs {
        if window.ends_with(&motif.pattern) {
            if let Some(next) = motif.most_common_next() {
                return Ok(next.to_string());
            }
        }
    }

    // The window is never empty here: generation anchors on a non-empty
    // input, so at least one symbol is present.
    let last_index = match window.last() {
        Some(symbol) => pitch::encode(symbol)? as i32,
        None => return Err(crate::Error::EmptyInput),
    };

    let interval = match random_interval(profile, rng) {
        Some(interval) => interval,
        None => chromatic_step(rng),
    };

    Ok(pitch::decode(last_index + interval).to_string())
}

/// Pick an interval uniformly from the profile's distinct values.
///
/// Deliberately unweighted: every distinct interval is equally likely no
/// matter how often it occurred. The frequency ranking in the profile
/// affects nothing here. Isolated so a weighted policy would be a
/// one-function change.
fn random_interval<R: Rng + ?Sized>(profile: &IntervalProfile, rng: &mut R) -> Option<i32> {
    profile.intervals.choose(rng).map(|&(interval, _)| interval)
}

/// Last-resort fallback: a chromatic step up or down.
fn chromatic_step<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) {
        1
    } else {
        -1
    }
}
