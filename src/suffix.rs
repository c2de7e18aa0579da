//! Offset index: suffix array over the lowercased corpus bytes.
//!
//! Construction uses SA-IS (induced sorting, O(n) time and space). Lookup is
//! two binary searches over the sorted suffixes, O(m · log n) for a needle of
//! length m.
//!
//! ```text
//! text:  b a n a n a        sorted suffixes      sa
//!        0 1 2 3 4 5        a                    5
//!                           ana                  3
//!                           anana                1
//!                           banana               0
//!                           na                   4
//!                           nana                 2
//!
//! lookup("an") -> suffixes in [1, 3) of sa -> offsets {3, 1}
//! ```
//!
//! References: Nong, Zhang, Chan (2009), "Linear Suffix Array Construction by
//! Almost Pure Induced-Sorting".

/// Marks an unfilled slot during induced sorting.
const EMPTY: usize = usize::MAX;

/// Input bytes are shifted by one so that 0 is free for the sentinel.
const BYTE_ALPHABET: usize = 257;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// Lexicographically smaller than the suffix to its right
    S,
    /// Lexicographically larger than the suffix to its right
    L,
}

/// Substring-occurrence index over a byte string.
#[derive(Debug, Default)]
pub struct SuffixIndex {
    text: Vec<u8>,
    sa: Vec<usize>,
}

impl SuffixIndex {
    /// Build the suffix array for `text`. The index takes ownership of the bytes.
    pub fn new(text: Vec<u8>) -> Self {
        let sa = build_suffix_array(&text);
        Self { text, sa }
    }

    /// All start offsets where `needle` occurs, in suffix order (not sorted by offset).
    ///
    /// An empty needle matches nothing.
    pub fn lookup(&self, needle: &[u8]) -> Vec<usize> {
        if needle.is_empty() || needle.len() > self.text.len() {
            return Vec::new();
        }
        let prefix = |pos: usize| {
            let end = (pos + needle.len()).min(self.text.len());
            &self.text[pos..end]
        };
        let lo = self.sa.partition_point(|&pos| prefix(pos) < needle);
        let hi = lo + self.sa[lo..].partition_point(|&pos| prefix(pos) == needle);
        self.sa[lo..hi].to_vec()
    }

    /// The indexed bytes.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Build the suffix array of a byte string: `sa[i]` is the start of the i-th smallest suffix.
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut shifted: Vec<usize> = text.iter().map(|&b| b as usize + 1).collect();
    shifted.push(0);

    let sa = sais(&shifted, BYTE_ALPHABET);

    // The sentinel suffix always sorts first
    sa.into_iter().filter(|&pos| pos < text.len()).collect()
}

/// SA-IS over an integer alphabet `0..alphabet_size`.
///
/// Callers guarantee the last symbol is a unique minimum (the sentinel); the
/// reduced strings built for recursion keep that property.
fn sais(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => return if text[0] < text[1] { vec![0, 1] } else { vec![1, 0] },
        _ => {}
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // First pass: LMS substrings end up sorted relative to each other
    let sa = induce(text, &types, &bucket_sizes, &lms_positions);

    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![0usize; n];
    for &pos in &sa {
        if pos == EMPTY || !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        lms_names[pos] = name;
        prev_pos = Some(pos);
    }
    let unique_count = name + 1;

    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();
    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais(&reduced, unique_count)
    } else {
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_by_key(|&i| reduced[i]);
        order
    };

    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    // Second pass with LMS suffixes in their final order
    induce(text, &types, &bucket_sizes, &sorted_lms)
}

/// Seed LMS positions at bucket tails, then induce L-type and S-type suffixes.
fn induce(text: &[usize], types: &[SuffixType], bucket_sizes: &[usize], lms: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut sa = vec![EMPTY; n];

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos];
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c = text[j];
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == EMPTY || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c = text[j];
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }

    sa
}

fn classify_suffixes(text: &[usize]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];
    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }
    types
}

/// LMS = S-type position preceded by an L-type position.
#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes(text: &[usize], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        heads.push(sum);
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        sum += size;
        tails.push(sum);
    }
    tails
}

/// Two LMS substrings are equal when symbols and types match up to and including the next LMS.
fn lms_substrings_equal(text: &[usize], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }
    let n = text.len();
    let mut k = 0;
    loop {
        let (pi, pj) = (i + k, j + k);
        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }
        if k > 0 {
            let (lms_i, lms_j) = (is_lms(types, pi), is_lms(types, pj));
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }
        k += 1;
    }
}
