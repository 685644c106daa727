use serde::{Deserialize, Serialize};

/// A single performed or generated note.
///
/// Input events come from the caller's recorded performance; extra fields
/// the caller attaches (velocity, UI ids, ...) are ignored on deserialize.
/// Generated events always carry a synthesized timestamp and a fixed
/// 500 ms duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Note symbol: pitch class + octave, e.g. "C4", "F#5"
    pub note: String,
    /// Onset in milliseconds
    pub timestamp: u64,
    /// Length in milliseconds
    #[serde(default = "default_duration")]
    pub duration: u64,
}

fn default_duration() -> u64 {
    crate::generate::STEP_MS
}

impl NoteEvent {
    pub fn new(note: impl Into<String>, timestamp: u64, duration: u64) -> Self {
        Self {
            note: note.into(),
            timestamp,
            duration,
        }
    }
}

/// A repeating pattern mined from the input, with statistics on what
/// followed it each time it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motif {
    /// 2–4 note symbols, in order
    pub pattern: Vec<String>,
    /// Following-note counts, in first-encountered order.
    ///
    /// Kept as an ordered list rather than a map so that "most common next
    /// note" ties resolve the same way on every run.
    pub next_notes: Vec<(String, u32)>,
    /// Total occurrences of the pattern (sum of `next_notes` counts)
    pub count: u32,
}

impl Motif {
    /// The next note seen most often after this pattern. Ties resolve to
    /// the symbol encountered first during mining.
    pub fn most_common_next(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (note, count) in &self.next_notes {
            if best.map_or(true, |(_, c)| *count > c) {
                best = Some((note, *count));
            }
        }
        best.map(|(note, _)| note)
    }

    pub(crate) fn record_next(&mut self, note: &str) {
        self.count += 1;
        if let Some(entry) = self.next_notes.iter_mut().find(|(n, _)| n == note) {
            entry.1 += 1;
        } else {
            self.next_notes.push((note.to_string(), 1));
        }
    }
}

/// Distinct melodic intervals observed in the input, with occurrence
/// counts, ordered most-frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalProfile {
    /// (signed interval in semitone steps, occurrence count)
    pub intervals: Vec<(i32, u32)>,
}

impl IntervalProfile {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Distinct interval values in rank order.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.intervals.iter().map(|&(interval, _)| interval)
    }
}
