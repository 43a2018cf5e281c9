use std::iter::FusedIterator;

/// Iterator over active slot indices within the scan range.
///
/// Borrows the activity flags for one pass only; build a fresh one each tick.
pub struct ActiveIndices<'a> {
    active: &'a [bool],
    next: usize,
}

impl<'a> ActiveIndices<'a> {
    pub(super) fn new(active: &'a [bool]) -> Self {
        Self { active, next: 0 }
    }
}

impl Iterator for ActiveIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.active.len() {
            let idx = self.next;
            self.next += 1;
            if self.active[idx] {
                return Some(idx);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.active.len() - self.next))
    }
}

impl FusedIterator for ActiveIndices<'_> {}
