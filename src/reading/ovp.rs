//! ORP (Optimal Recognition Point) pivot resolution
//!
//! A chunk is split into the text left of the pivot, the pivot character and
//! the text right of it. The UI pins the pivot to a fixed column so the eye
//! never moves between chunks.
//!
//! Single words use a length-banded rule: recognition is fastest slightly
//! left of the visual centre, and the offset grows slowly with length.
//! With the default thresholds:
//! - 0-1 chars → position 0
//! - 2-5 chars → position 1
//! - 6-9 chars → position 2
//! - 10-13 chars → position 3
//! - 14+ chars → position 4
//!
//! Multi-word chunks pivot on their geometric midpoint instead.
//!
//! All lengths and positions count grapheme clusters, so the pivot is always
//! one user-perceived character.

use unicode_segmentation::UnicodeSegmentation;

/// Length thresholds for the single-word pivot rule.
///
/// The pivot index of a word is the number of thresholds its length reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotBands {
    thresholds: Vec<usize>,
}

impl PivotBands {
    /// Builds bands from thresholds; they are sorted so the rule stays
    /// monotonic in word length.
    pub fn new(mut thresholds: Vec<usize>) -> Self {
        thresholds.sort_unstable();
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[usize] {
        &self.thresholds
    }

    pub fn pivot_index(&self, len: usize) -> usize {
        self.thresholds.iter().take_while(|&&t| len >= t).count()
    }
}

impl Default for PivotBands {
    fn default() -> Self {
        Self::new(vec![2, 6, 10, 14])
    }
}

/// A chunk split around its pivot character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PivotResult {
    pub left: String,
    /// One grapheme, or empty when the chunk is empty.
    pub pivot_char: String,
    pub right: String,
}

impl PivotResult {
    pub fn is_empty(&self) -> bool {
        self.pivot_char.is_empty()
    }

    /// Grapheme offset of the pivot within the chunk.
    pub fn pivot_index(&self) -> usize {
        self.left.graphemes(true).count()
    }
}

/// Resolves the pivot of `chunk` using the default bands.
pub fn resolve_pivot(chunk: &str) -> PivotResult {
    resolve_pivot_with(chunk, &PivotBands::default())
}

pub fn resolve_pivot_with(chunk: &str, bands: &PivotBands) -> PivotResult {
    let graphemes: Vec<&str> = chunk.graphemes(true).collect();
    if graphemes.is_empty() {
        return PivotResult::default();
    }

    let index = correct_for_space(&graphemes, raw_pivot_index(&graphemes, bands));

    PivotResult {
        left: graphemes[..index].concat(),
        pivot_char: graphemes[index].to_string(),
        right: graphemes[index + 1..].concat(),
    }
}

fn raw_pivot_index(graphemes: &[&str], bands: &PivotBands) -> usize {
    let len = graphemes.len();
    if graphemes.iter().any(|g| is_space(g)) {
        // Several words: geometric midpoint, earlier character on ties
        (len - 1) / 2
    } else {
        bands.pivot_index(len).min(len - 1)
    }
}

/// Moves a pivot that landed on a space onto a neighbouring character.
fn correct_for_space(graphemes: &[&str], index: usize) -> usize {
    if !is_space(graphemes[index]) {
        return index;
    }
    if index > 0 && !is_space(graphemes[index - 1]) {
        return index - 1;
    }
    if index + 1 < graphemes.len() && !is_space(graphemes[index + 1]) {
        return index + 1;
    }
    index
}

fn is_space(grapheme: &str) -> bool {
    grapheme == " "
}
