use crate::types::{IntervalProfile, NoteEvent};
use crate::{pitch, Result};

/// Tabulate the melodic intervals of the input.
///
/// Each consecutive pair contributes `encode(next) - encode(prev)` as a
/// signed, unwrapped difference. Distinct values are ranked by descending
/// occurrence count (stable, so ties keep first-seen order). An input of
/// one note or fewer yields an empty profile.
pub fn profile_intervals(notes: &[NoteEvent]) -> Result<IntervalProfile> {
    let mut intervals: Vec<(i32, u32)> = Vec::new();

    for pair in notes.windows(2) {
        let prev = pitch::encode(&pair[0].note)? as i32;
        let next = pitch::encode(&pair[1].note)? as i32;
        let interval = next - prev;

        if let Some(entry) = intervals.iter_mut().find(|(i, _)| *i == interval) {
            entry.1 += 1;
        } else {
            intervals.push((interval, 1));
        }
    }

    intervals.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(IntervalProfile { intervals })
}
