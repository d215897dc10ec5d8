use std::cmp::Ordering;

/// Natural comparison: runs of ASCII digits compare by numeric value,
/// everything else byte by byte.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    let mut ai = 0;
    let mut bi = 0;

    loop {
        match (a_bytes.get(ai), b_bytes.get(bi)) {
            (Some(&ac), Some(&bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let a_start = ai;
                    while ai < a_bytes.len() && a_bytes[ai].is_ascii_digit() {
                        ai += 1;
                    }
                    let b_start = bi;
                    while bi < b_bytes.len() && b_bytes[bi].is_ascii_digit() {
                        bi += 1;
                    }

                    // Skip leading zeros, keeping at least one digit
                    let mut a_trimmed = a_start;
                    while a_trimmed < ai - 1 && a_bytes[a_trimmed] == b'0' {
                        a_trimmed += 1;
                    }
                    let mut b_trimmed = b_start;
                    while b_trimmed < bi - 1 && b_bytes[b_trimmed] == b'0' {
                        b_trimmed += 1;
                    }

                    let a_len = ai - a_trimmed;
                    let b_len = bi - b_trimmed;
                    if a_len != b_len {
                        return a_len.cmp(&b_len);
                    }
                    let cmp = a_bytes[a_trimmed..ai].cmp(&b_bytes[b_trimmed..bi]);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                    // "007" sorts after "7"
                    let zeros = (ai - a_start).cmp(&(bi - b_start));
                    if zeros != Ordering::Equal {
                        return zeros;
                    }
                } else {
                    if ac != bc {
                        return ac.cmp(&bc);
                    }
                    ai += 1;
                    bi += 1;
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Natural comparison ignoring case.
pub fn compare_natural_ignore_case(a: &str, b: &str) -> Ordering {
    compare_natural(&a.to_lowercase(), &b.to_lowercase())
}

/// Sort in place by a string key, case-insensitively and numeric-aware.
/// The sort is stable, so keys that compare equal keep their input order.
pub fn natural_sort_by_key<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| NaturalKey(key(item).to_lowercase()));
}

#[derive(PartialEq, Eq)]
struct NaturalKey(String);

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_natural(&self.0, &other.0)
    }
}
