/*
    Run length encoding
        walk the slice once
        close a run whenever the value changes, and at the end
*/

/// Maximal stretch of identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSegment<T> {
    pub start: usize,
    pub length: usize,
    pub value: T,
}

impl<T> RunSegment<T> {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

pub fn run_length_encode<T: PartialEq + Copy>(values: &[T]) -> Vec<RunSegment<T>> {
    let mut runs: Vec<RunSegment<T>> = Vec::new();
    for (idx, &value) in values.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.value == value => run.length += 1,
            _ => runs.push(RunSegment { start: idx, length: 1, value }),
        }
    }
    runs
}
