//! Motif-based melodic continuation.
//!
//! Given a recorded melody, this crate mines its repeating 2–4 note
//! patterns ("motifs"), profiles its melodic intervals, and extends the
//! melody one note at a time: the best-matching motif proposes the next
//! note, a random profiled interval fills in when no motif matches, and a
//! chromatic step is the last resort. Notes live in a fixed two-octave
//! alphabet (C4..B5) and generated events are spaced 500 ms apart.
//!
//! # Example
//!
//! ```
//! use melody_continue::{continue_melody, NoteEvent};
//!
//! let input = vec![
//!     NoteEvent::new("C4", 0, 500),
//!     NoteEvent::new("D4", 500, 500),
//!     NoteEvent::new("E4", 1000, 500),
//! ];
//!
//! let continuation = continue_melody(&input, 8).unwrap();
//! assert_eq!(continuation.len(), 8);
//! assert_eq!(continuation[0].timestamp, 1500);
//! ```
//!
//! Everything is request-scoped: each call builds its own motif table and
//! interval profile from its own input, so concurrent calls share nothing.

pub mod generate;
pub mod interval;
pub mod motif;
pub mod pitch;
pub mod types;

pub use generate::{STEP_MS, WINDOW_LEN};
pub use interval::profile_intervals;
pub use motif::mine_motifs;
pub use types::{IntervalProfile, Motif, NoteEvent};

use rand::Rng;

/// Continuation length used by callers that don't specify one.
pub const DEFAULT_LENGTH: usize = 8;

/// Errors from melodic continuation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown note symbol: {symbol:?}")]
    UnknownSymbol { symbol: String },

    #[error("input melody is empty")]
    EmptyInput,

    #[error("target length must be positive, got {length}")]
    InvalidTargetLength { length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Continue a melody by `length` notes using a thread-local RNG.
///
/// See [`continue_melody_with_rng`] for the contract; prefer that form
/// when reproducibility matters (tests, replayable sessions).
pub fn continue_melody(notes: &[NoteEvent], length: usize) -> Result<Vec<NoteEvent>> {
    continue_melody_with_rng(notes, length, &mut rand::rng())
}

/// Continue a melody by `length` notes, drawing randomness from `rng`.
///
/// Mines motifs and profiles intervals over the full input, then generates
/// `length` notes per the motif/interval/chromatic fallback chain.
///
/// Fails fast, before any generation: [`Error::EmptyInput`] when `notes`
/// is empty, [`Error::InvalidTargetLength`] when `length` is zero, and
/// [`Error::UnknownSymbol`] when any input note is outside the 24-symbol
/// alphabet. Never returns a partial continuation.
pub fn continue_melody_with_rng<R: Rng + ?Sized>(
    notes: &[NoteEvent],
    length: usize,
    rng: &mut R,
) -> Result<Vec<NoteEvent>> {
    if notes.is_empty() {
        return Err(Error::EmptyInput);
    }
    if length == 0 {
        return Err(Error::InvalidTargetLength { length });
    }
    for note in notes {
        pitch::encode(&note.note)?;
    }

    let motifs = motif::mine_motifs(notes);
    let profile = interval::profile_intervals(notes)?;

    generate::generate(notes, &motifs, &profile, length, rng)
}
