use std::collections::HashMap;

use tracing::debug;

use crate::types::{Motif, NoteEvent};

/// Shortest pattern length mined.
pub const MIN_PATTERN_LEN: usize = 2;
/// Longest pattern length mined.
pub const MAX_PATTERN_LEN: usize = 4;

/// Mine repeating patterns of 2–4 notes from the input.
///
/// For every window of `L` notes followed by at least one more note, the
/// window's symbols become a pattern key and the following note is counted
/// against it. Patterns seen only once are kept; the count ranks rather
/// than filters.
///
/// The result is sorted by descending total count with a stable sort, so
/// ties keep discovery order: shortest patterns first, then earliest
/// position in the input. That rank order is what the generator walks.
///
/// Inputs shorter than 3 notes have no 2-note window with a successor and
/// yield an empty vec.
pub fn mine_motifs(notes: &[NoteEvent]) -> Vec<Motif> {
    let mut motifs: Vec<Motif> = Vec::new();
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();

    for len in MIN_PATTERN_LEN..=MAX_PATTERN_LEN {
        if notes.len() <= len {
            break;
        }
        for start in 0..notes.len() - len {
            let pattern: Vec<String> = notes[start..start + len]
                .iter()
                .map(|n| n.note.clone())
                .collect();
            let next = notes[start + len].note.as_str();

            let idx = *index.entry(pattern.clone()).or_insert_with(|| {
                motifs.push(Motif {
                    pattern,
                    next_notes: Vec::new(),
                    count: 0,
                });
                motifs.len() - 1
            });
            motifs[idx].record_next(next);
        }
    }

    motifs.sort_by(|a, b| b.count.cmp(&a.count));

    debug!(
        motifs = motifs.len(),
        top_count = motifs.first().map(|m| m.count).unwrap_or(0),
        "mined motifs"
    );

    motifs
}
