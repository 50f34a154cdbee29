// Line diff of an input text against its substituted output

/// One step of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit<'a> {
    Keep,
    Remove(&'a str),
    Add(&'a str),
}

/// Render the changed lines between `old` and `new`.
///
/// Removed lines are prefixed with `"- "`, added lines with `"+ "`; each
/// is terminated by a newline. Within a run of changes, removals come
/// before additions. Identical texts yield an empty string.
pub fn line_diff(old: &str, new: &str) -> String {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let mut script = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    conquer(&old_lines, &new_lines, &mut script);

    let mut out = String::new();
    let mut removed = Vec::new();
    let mut added = Vec::new();
    for edit in script {
        match edit {
            Edit::Remove(line) => removed.push(line),
            Edit::Add(line) => added.push(line),
            Edit::Keep => flush(&mut out, &mut removed, &mut added),
        }
    }
    flush(&mut out, &mut removed, &mut added);
    out
}

fn flush(out: &mut String, removed: &mut Vec<&str>, added: &mut Vec<&str>) {
    for line in removed.drain(..) {
        out.push_str("- ");
        out.push_str(line);
        out.push('\n');
    }
    for line in added.drain(..) {
        out.push_str("+ ");
        out.push_str(line);
        out.push('\n');
    }
}

// ---------------------------------------------------------------------------
// Myers' linear-space diff
//
// O((N + M) * D) time and O(N + M) space, D being the number of removed
// plus added lines. Each step trims the common prefix and suffix, splits
// the rest at the middle snake of a shortest edit path and recurses on
// both halves.
// ---------------------------------------------------------------------------

fn conquer<'a>(old: &[&'a str], new: &[&'a str], script: &mut Vec<Edit<'a>>) {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    script.extend(std::iter::repeat_n(Edit::Keep, prefix));
    let (old, new) = (&old[prefix..], &new[prefix..]);

    let suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let (old, new) = (&old[..old.len() - suffix], &new[..new.len() - suffix]);

    let split = if old.is_empty() || new.is_empty() {
        None
    } else {
        middle_snake(old, new)
            .filter(|&(x, y)| (x, y) != (0, 0) && (x, y) != (old.len(), new.len()))
    };

    match split {
        Some((x, y)) => {
            conquer(&old[..x], &new[..y], script);
            conquer(&old[x..], &new[y..], script);
        }
        None => {
            script.extend(old.iter().map(|&line| Edit::Remove(line)));
            script.extend(new.iter().map(|&line| Edit::Add(line)));
        }
    }

    script.extend(std::iter::repeat_n(Edit::Keep, suffix));
}

/// Split point on a shortest edit path from `(0, 0)` to
/// `(old.len(), new.len())`, found by searching from both ends at once.
///
/// Both sequences must be non-empty.
fn middle_snake(old: &[&str], new: &[&str]) -> Option<(usize, usize)> {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let delta = n - m;
    let odd = delta % 2 != 0;
    let max = (n + m + 1) / 2;
    let offset = max + 1;

    // Furthest x reached on each diagonal k = x - y; backward values are
    // measured from the end of both sequences.
    let mut forward = vec![0isize; (2 * offset + 1) as usize];
    let mut backward = vec![0isize; (2 * offset + 1) as usize];
    let at = |k: isize| (k + offset) as usize;

    for d in 0..=max {
        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && forward[at(k - 1)] < forward[at(k + 1)]) {
                forward[at(k + 1)]
            } else {
                forward[at(k - 1)] + 1
            };
            let mut y = x - k;
            let (x0, y0) = (x, y);
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            forward[at(k)] = x;

            let reverse_k = delta - k;
            if odd
                && reverse_k.abs() < d
                && x <= n
                && y <= m
                && x + backward[at(reverse_k)] >= n
            {
                return Some((x0 as usize, y0 as usize));
            }
            k += 2;
        }

        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && backward[at(k - 1)] < backward[at(k + 1)]) {
                backward[at(k + 1)]
            } else {
                backward[at(k - 1)] + 1
            };
            let mut y = x - k;
            while x < n && y < m && old[(n - 1 - x) as usize] == new[(m - 1 - y) as usize] {
                x += 1;
                y += 1;
            }
            backward[at(k)] = x;

            let forward_k = delta - k;
            if !odd
                && forward_k.abs() <= d
                && x <= n
                && y <= m
                && x + forward[at(forward_k)] >= n
            {
                return Some(((n - x) as usize, (m - y) as usize));
            }
            k += 2;
        }
    }
    None
}
