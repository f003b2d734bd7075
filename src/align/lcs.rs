use super::EditOperation;

/// Prefix LCS lengths, `(n + 1) x (m + 1)` cells laid out row by row.
struct Table {
    cells: Vec<u32>,
    width: usize,
}

impl Table {
    fn build<T: Eq>(old: &[T], new: &[T]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * width];
        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * width + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + j - 1] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + j - 1])
                };
            }
        }
        Table { cells, width }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Length of the longest common subsequence of `old` and `new`.
pub fn lcs_len<T: Eq>(old: &[T], new: &[T]) -> usize {
    Table::build(old, new).get(old.len(), new.len()) as usize
}

/// Aligns `old` and `new` by backtracking through the LCS table.
///
/// Equal lines are always kept. Otherwise, when dropping the last `new`
/// line keeps at least as long an LCS as dropping the last `old` line, an
/// insert is emitted. Because the walk runs from the end, this puts deletes
/// before inserts in every replaced block of the forward script.
pub fn diff<T: Eq>(old: &[T], new: &[T]) -> Vec<EditOperation> {
    if old.is_empty() {
        return (0..new.len()).map(EditOperation::Insert).collect();
    }
    if new.is_empty() {
        return (0..old.len()).map(EditOperation::Delete).collect();
    }

    let table = Table::build(old, new);
    let mut ops = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (old.len(), new.len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            ops.push(EditOperation::Keep(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(EditOperation::Insert(j - 1));
            j -= 1;
        } else {
            ops.push(EditOperation::Delete(i - 1));
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
