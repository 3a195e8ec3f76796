//! Sort engine: bubble / selection / insertion / merge / quick
//!
//! Every comparison is emitted as its own [`Step::Compare`] before any
//! swap it triggers, and each step snapshots the entire working array,
//! so frame-accurate single-stepping never has to re-execute the
//! algorithm. The engine sorts a private copy of the input; the final
//! step is a settle frame whose `sorted` set spans the full range.

mod algos;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgovizError, Result};
use crate::step::Step;

/// Algorithm selector for the sort engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortVariant {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl FromStr for SortVariant {
    type Err = AlgovizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(SortVariant::Bubble),
            "selection" => Ok(SortVariant::Selection),
            "insertion" => Ok(SortVariant::Insertion),
            "merge" => Ok(SortVariant::Merge),
            "quick" => Ok(SortVariant::Quick),
            other => Err(AlgovizError::invalid_input(format!(
                "unknown sort variant '{}' (expected: bubble, selection, insertion, merge, quick)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortVariant::Bubble => "bubble",
            SortVariant::Selection => "selection",
            SortVariant::Insertion => "insertion",
            SortVariant::Merge => "merge",
            SortVariant::Quick => "quick",
        };
        write!(f, "{}", name)
    }
}

/// Sort a private copy of `values`, returning the full step trace
#[tracing::instrument(skip(values), fields(variant = %variant, len = values.len()))]
pub fn run_sort(values: &[i64], variant: SortVariant) -> Result<Vec<Step>> {
    if values.is_empty() {
        return Err(AlgovizError::empty_input("array"));
    }

    let mut array = values.to_vec();
    let mut steps = Vec::new();
    match variant {
        SortVariant::Bubble => algos::bubble_sort(&mut array, &mut steps),
        SortVariant::Selection => algos::selection_sort(&mut array, &mut steps),
        SortVariant::Insertion => algos::insertion_sort(&mut array, &mut steps),
        SortVariant::Merge => algos::merge_sort(&mut array, &mut steps),
        SortVariant::Quick => algos::quick_sort(&mut array, &mut steps),
    }

    // Settle frame: nothing active, every index locked in
    steps.push(compare_frame(
        &array,
        Vec::new(),
        Vec::new(),
        (0..array.len()).collect(),
    ));

    tracing::debug!(steps = steps.len(), "sort complete");
    Ok(steps)
}

pub(crate) fn compare_frame(
    array: &[i64],
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    sorted: Vec<usize>,
) -> Step {
    Step::Compare {
        array: array.to_vec(),
        comparing,
        swapping,
        sorted,
    }
}

pub(crate) fn swap_frame(
    array: &[i64],
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    sorted: Vec<usize>,
) -> Step {
    Step::Swap {
        array: array.to_vec(),
        comparing,
        swapping,
        sorted,
    }
}
