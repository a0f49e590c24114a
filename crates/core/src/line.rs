//! Line module - slide and merge a single row or column
//!
//! Every move reduces to the same operation on each line, read so that index 0
//! is the edge the tiles travel toward:
//!
//! 1. Compact the tiles toward index 0, keeping their order.
//! 2. Scan from index 0; two neighbouring equal tiles become one tile of
//!    double value. The merged tile is not compared again, so `2 2 2` gives
//!    `4 2`, never `8`.
//! 3. Pad the rest with empty cells.

use arrayvec::ArrayVec;

use crate::board::Line;
use crate::types::{Cell, MAX_BOARD_SIZE};

/// Outcome of sliding one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// The line after the slide, same length as the input
    pub cells: Line,
    /// Sum of the values created by merges
    pub score: u64,
    /// Number of merges performed
    pub merges: u32,
    /// Whether any cell differs from the input
    pub changed: bool,
}

/// Slide and merge `line` toward index 0
///
/// Input longer than the largest board is truncated.
///
/// ```
/// use tui_2048_core::slide_line;
///
/// let result = slide_line(&[Some(2), Some(2), Some(2), None]);
/// assert_eq!(result.cells.as_slice(), &[Some(4), Some(2), None, None]);
/// assert_eq!(result.score, 4);
/// assert!(result.changed);
/// ```
pub fn slide_line(line: &[Cell]) -> LineResult {
    let len = line.len().min(MAX_BOARD_SIZE as usize);
    let input = &line[..len];

    let tiles: ArrayVec<u32, { MAX_BOARD_SIZE as usize }> =
        input.iter().flatten().copied().collect();

    let mut cells = Line::new();
    let mut score = 0u64;
    let mut merges = 0u32;

    let mut i = 0;
    while i < tiles.len() {
        let value = tiles[i];
        let merged = match tiles.get(i + 1) {
            Some(&next) if next == value => value.checked_mul(2),
            _ => None,
        };
        match merged {
            Some(doubled) => {
                cells.push(Some(doubled));
                score += doubled as u64;
                merges += 1;
                i += 2;
            }
            None => {
                cells.push(Some(value));
                i += 1;
            }
        }
    }
    while cells.len() < len {
        cells.push(None);
    }

    let changed = cells.as_slice() != input;
    LineResult {
        cells,
        score,
        merges,
        changed,
    }
}

/// True if sliding `line` toward index 0 would change it
///
/// Cheaper than [`slide_line`]: no output line is built.
pub fn line_can_slide(line: &[Cell]) -> bool {
    let mut seen_gap = false;
    let mut prev: Option<u32> = None;
    for &cell in line {
        match cell {
            None => seen_gap = true,
            Some(value) => {
                if seen_gap {
                    return true;
                }
                if prev == Some(value) && value.checked_mul(2).is_some() {
                    return true;
                }
                prev = Some(value);
            }
        }
    }
    false
}
