use super::EditOperation;

/// Furthest-reaching coordinate per diagonal, indexed from `-size..=size`.
struct V {
    data: Vec<isize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> isize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: isize) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// Part of the edit graph: old lines `left..right` against new lines
/// `top..bottom`.
#[derive(Debug, Clone, Copy)]
struct Region {
    left: isize,
    top: isize,
    right: isize,
    bottom: isize,
}

impl Region {
    fn width(&self) -> isize {
        self.right - self.left
    }

    fn height(&self) -> isize {
        self.bottom - self.top
    }

    fn size(&self) -> isize {
        self.width() + self.height()
    }

    fn delta(&self) -> isize {
        self.width() - self.height()
    }
}

type Point = (isize, isize);

/// The middle snake of a region: at most one insert or delete plus a run
/// of `len` matches starting at `run`, spanning `from..to`.
#[derive(Debug)]
struct Snake {
    from: Point,
    to: Point,
    run: Point,
    len: isize,
}

/// Computes a shortest edit script with Myers' linear-space refinement.
///
/// Each region is split at its middle snake, found by searching forward
/// from the top-left and backward from the bottom-right until the two
/// frontiers meet, and both halves are solved recursively. Only the two
/// frontier vectors of the current search are alive at a time, so memory
/// is O(n + m) against O(n * m) for the LCS table. Every change run comes
/// out as deletes-then-inserts, the same shape the LCS walk emits.
pub fn diff<T: Eq>(old: &[T], new: &[T]) -> Vec<EditOperation> {
    let mut matches = Vec::new();
    let region = Region {
        left: 0,
        top: 0,
        right: old.len() as isize,
        bottom: new.len() as isize,
    };
    find_matches(old, new, region, &mut matches);
    fill_gaps(old.len(), new.len(), &matches)
}

/// Appends the matched `(old, new)` pairs of `region` in order.
fn find_matches<T: Eq>(old: &[T], new: &[T], region: Region, matches: &mut Vec<(usize, usize)>) {
    if region.width() == 0 || region.height() == 0 {
        return;
    }
    let snake = middle_snake(old, new, region);

    let head = Region {
        right: snake.from.0,
        bottom: snake.from.1,
        ..region
    };
    find_matches(old, new, head, matches);
    let (x, y) = snake.run;
    matches.extend((0..snake.len).map(|i| ((x + i) as usize, (y + i) as usize)));
    let tail = Region {
        left: snake.to.0,
        top: snake.to.1,
        ..region
    };
    find_matches(old, new, tail, matches);
}

fn middle_snake<T: Eq>(old: &[T], new: &[T], region: Region) -> Snake {
    let max = (region.size() + 1) / 2;
    let delta = region.delta();
    let odd = delta % 2 != 0;
    // forward frontier holds x, backward frontier holds y
    let mut vf = V::new(max as usize);
    let mut vb = V::new(max as usize);
    vf.set(1, region.left);
    vb.set(1, region.bottom);

    for d in 0..=max {
        for k in (-d..=d).rev().step_by(2) {
            let c = k - delta;
            let (px, mut x) = if k == -d || (k != d && vf.get(k - 1) < vf.get(k + 1)) {
                (vf.get(k + 1), vf.get(k + 1))
            } else {
                (vf.get(k - 1), vf.get(k - 1) + 1)
            };
            let mut y = region.top + (x - region.left) - k;
            let py = if d == 0 || x != px { y } else { y - 1 };
            while x < region.right && y < region.bottom && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            vf.set(k, x);
            if odd && -(d - 1) <= c && c <= d - 1 && y >= vb.get(c) {
                let len = (x - px).min(y - py);
                return Snake {
                    from: (px, py),
                    to: (x, y),
                    run: (x - len, y - len),
                    len,
                };
            }
        }

        for c in (-d..=d).rev().step_by(2) {
            let k = c + delta;
            let (py, mut y) = if c == -d || (c != d && vb.get(c - 1) > vb.get(c + 1)) {
                (vb.get(c + 1), vb.get(c + 1))
            } else {
                (vb.get(c - 1), vb.get(c - 1) - 1)
            };
            let mut x = region.left + (y - region.top) + k;
            let px = if d == 0 || y != py { x } else { x + 1 };
            while x > region.left && y > region.top && old[(x - 1) as usize] == new[(y - 1) as usize] {
                x -= 1;
                y -= 1;
            }
            vb.set(c, y);
            if !odd && -d <= k && k <= d && x <= vf.get(k) {
                return Snake {
                    from: (x, y),
                    to: (px, py),
                    run: (x, y),
                    len: (px - x).min(py - y),
                };
            }
        }
    }

    // the frontiers always meet by round ceil((n + m) / 2)
    unreachable!("no middle snake in {region:?}")
}

/// Expands sorted matches into a full script, deleting then inserting the
/// lines between consecutive matches.
fn fill_gaps(n: usize, m: usize, matches: &[(usize, usize)]) -> Vec<EditOperation> {
    let mut changes = Vec::with_capacity(n + m - matches.len());
    let (mut x, mut y) = (0, 0);
    for &(i, j) in matches.iter().chain(std::iter::once(&(n, m))) {
        changes.extend((x..i).map(EditOperation::Delete));
        changes.extend((y..j).map(EditOperation::Insert));
        if i < n {
            changes.push(EditOperation::Keep(i, j));
        }
        (x, y) = (i + 1, j + 1);
    }
    changes
}
