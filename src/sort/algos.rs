//! Sort algorithm implementations
//!
//! Each function sorts the working array in place while appending
//! steps; snapshots are taken before the mutation a step announces, so
//! a swap step shows the array as it looked when the exchange was
//! decided.

use crate::sort::{compare_frame, swap_frame};
use crate::step::Step;

/// Adjacent pairs left-to-right per pass; the settled suffix grows
/// from the right
pub(crate) fn bubble_sort(array: &mut [i64], steps: &mut Vec<Step>) {
    let n = array.len();
    for i in 0..n.saturating_sub(1) {
        let sorted: Vec<usize> = (0..i).map(|k| n - 1 - k).collect();
        for j in 0..n - i - 1 {
            steps.push(compare_frame(array, vec![j, j + 1], Vec::new(), sorted.clone()));
            if array[j] > array[j + 1] {
                steps.push(swap_frame(
                    array,
                    vec![j, j + 1],
                    vec![j, j + 1],
                    sorted.clone(),
                ));
                array.swap(j, j + 1);
            }
        }
    }
}

/// Scan for the minimum of the unsorted suffix, one swap per pass
pub(crate) fn selection_sort(array: &mut [i64], steps: &mut Vec<Step>) {
    let n = array.len();
    for i in 0..n.saturating_sub(1) {
        let sorted: Vec<usize> = (0..i).collect();
        let mut min_idx = i;
        for j in i + 1..n {
            steps.push(compare_frame(
                array,
                vec![min_idx, j],
                Vec::new(),
                sorted.clone(),
            ));
            if array[j] < array[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            steps.push(swap_frame(
                array,
                Vec::new(),
                vec![i, min_idx],
                sorted.clone(),
            ));
            array.swap(i, min_idx);
        }
    }
}

/// Shift elements rightward while strictly greater than the key
///
/// A key-pickup frame (single index) announces each key before the
/// shift tests start.
pub(crate) fn insertion_sort(array: &mut [i64], steps: &mut Vec<Step>) {
    let n = array.len();
    for i in 1..n {
        let key = array[i];
        let sorted: Vec<usize> = (0..i).collect();
        steps.push(compare_frame(array, vec![i], Vec::new(), sorted.clone()));
        let mut j = i;
        while j > 0 {
            steps.push(compare_frame(
                array,
                vec![j - 1, j],
                Vec::new(),
                sorted.clone(),
            ));
            if array[j - 1] <= key {
                break;
            }
            steps.push(swap_frame(
                array,
                vec![j - 1, j],
                vec![j - 1, j],
                sorted.clone(),
            ));
            array[j] = array[j - 1];
            j -= 1;
        }
        array[j] = key;
    }
}

/// Recursive midpoint split, then merge with per-test compare steps
pub(crate) fn merge_sort(array: &mut [i64], steps: &mut Vec<Step>) {
    let n = array.len();
    merge_sort_range(array, 0, n - 1, steps);
}

fn merge_sort_range(array: &mut [i64], left: usize, right: usize, steps: &mut Vec<Step>) {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort_range(array, left, mid, steps);
        merge_sort_range(array, mid + 1, right, steps);
        merge(array, left, mid, right, steps);
    }
}

fn merge(array: &mut [i64], left: usize, mid: usize, right: usize, steps: &mut Vec<Step>) {
    let left_run = array[left..=mid].to_vec();
    let right_run = array[mid + 1..=right].to_vec();
    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        steps.push(compare_frame(
            array,
            vec![left + i, mid + 1 + j],
            Vec::new(),
            Vec::new(),
        ));
        if left_run[i] <= right_run[j] {
            array[k] = left_run[i];
            i += 1;
        } else {
            array[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }

    while i < left_run.len() {
        array[k] = left_run[i];
        i += 1;
        k += 1;
    }

    while j < right_run.len() {
        array[k] = right_run[j];
        j += 1;
        k += 1;
    }
}

/// Lomuto partition with the last element of the range as pivot
pub(crate) fn quick_sort(array: &mut [i64], steps: &mut Vec<Step>) {
    let n = array.len();
    quick_sort_range(array, 0, n - 1, steps);
}

fn quick_sort_range(array: &mut [i64], low: usize, high: usize, steps: &mut Vec<Step>) {
    if low >= high {
        return;
    }
    let pivot_index = partition(array, low, high, steps);
    if pivot_index > 0 {
        quick_sort_range(array, low, pivot_index - 1, steps);
    }
    quick_sort_range(array, pivot_index + 1, high, steps);
}

fn partition(array: &mut [i64], low: usize, high: usize, steps: &mut Vec<Step>) -> usize {
    let pivot = array[high];
    // Next slot for an element smaller than the pivot
    let mut store = low;
    for j in low..high {
        steps.push(compare_frame(array, vec![j, high], Vec::new(), Vec::new()));
        if array[j] < pivot {
            if store != j {
                steps.push(swap_frame(
                    array,
                    vec![j, high],
                    vec![store, j],
                    Vec::new(),
                ));
                array.swap(store, j);
            }
            store += 1;
        }
    }
    // Pivot-to-partition-point swap, skipped when already in place
    if store != high {
        steps.push(swap_frame(array, Vec::new(), vec![store, high], Vec::new()));
        array.swap(store, high);
    }
    store
}
