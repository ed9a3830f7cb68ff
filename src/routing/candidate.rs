//! Candidate action name generation.
//!
//! For `/sea/land/iks/` the names come out in this order:
//!
//! ```text
//! consumed 1 : seaAction, sea_seaAction
//! consumed 2 : seaLandAction, sea_seaLandAction, sea_land_seaLandAction
//! consumed 3 : seaLandIksAction, sea_seaLandIksAction,
//!              sea_land_seaLandIksAction, sea_land_iks_seaLandIksAction
//! ```
//!
//! The class prefix is fixed for a consumed count; only the package/class
//! split moves, from no package to every consumed segment.
//!
//! Names are built from request words. With the default `/` delimiter a word
//! is a segment; with any other decamelize delimiter, segments are split on
//! it too, so `/sea-land/` under `-` reads as `sea`, `land`.

use crate::naming::{init_cap, init_uncap};

/// One guessed action component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCandidate {
    /// Segments folded into the name (0 only for the root action).
    pub consumed: usize,
    /// Segments folded into the package prefix.
    pub depth: usize,
    pub package_prefix: String,
    pub class_prefix: String,
    pub full_name: String,
}

impl ActionCandidate {
    fn new(consumed: usize, depth: usize, package_prefix: String, class_prefix: String, suffix: &str) -> Self {
        let mut full_name = String::with_capacity(package_prefix.len() + class_prefix.len() + suffix.len());
        full_name.push_str(&package_prefix);
        full_name.push_str(&class_prefix);
        full_name.push_str(suffix);
        Self {
            consumed,
            depth,
            package_prefix,
            class_prefix,
            full_name,
        }
    }
}

/// Iterator over candidate names for a segment list.
#[derive(Debug, Clone)]
pub struct CandidateNames<'a> {
    segments: &'a [&'a str],
    suffix: &'a str,
    root_name: &'a str,
    index: usize,
    depth: usize,
    class_prefix: String,
    root_pending: bool,
}

impl<'a> CandidateNames<'a> {
    pub fn new(segments: &'a [&'a str], suffix: &'a str, root_name: &'a str) -> Self {
        Self {
            segments,
            suffix,
            root_name,
            index: 0,
            depth: 0,
            class_prefix: String::new(),
            root_pending: segments.is_empty(),
        }
    }

    fn package_prefix(&self) -> String {
        self.segments[..self.depth]
            .iter()
            .map(|s| format!("{}_", s.to_lowercase()))
            .collect()
    }
}

impl Iterator for CandidateNames<'_> {
    type Item = ActionCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.root_pending {
            self.root_pending = false;
            return Some(ActionCandidate::new(0, 0, String::new(), self.root_name.to_string(), self.suffix));
        }
        let segment = self.segments.get(self.index)?;
        if self.depth == 0 {
            if self.index == 0 {
                self.class_prefix.push_str(&init_uncap(segment));
            } else {
                self.class_prefix.push_str(&init_cap(segment));
            }
        }

        let candidate = ActionCandidate::new(
            self.index + 1,
            self.depth,
            self.package_prefix(),
            self.class_prefix.clone(),
            self.suffix,
        );

        self.depth += 1;
        if self.depth > self.index + 1 {
            self.depth = 0;
            self.index += 1;
        }
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.segments.is_empty() {
            let n = usize::from(self.root_pending);
            return (n, Some(n));
        }
        let n = self.segments.len();
        // index i yields i + 2 names
        let total_from = |i: usize| -> usize { (i..n).map(|k| k + 2).sum() };
        let remaining = if self.index >= n {
            0
        } else {
            total_from(self.index) - self.depth
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateNames<'_> {}

/// Split a request path into its non-empty `/` segments.
pub fn split_segments(request_path: &str) -> Vec<&str> {
    request_path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A request path broken into the words candidate names are built from.
#[derive(Debug, Clone)]
pub struct RequestWords<'a> {
    path: &'a str,
    delimiter: &'a str,
    words: Vec<&'a str>,
    /// Byte offset in `path` just past each word.
    ends: Vec<usize>,
}

impl<'a> RequestWords<'a> {
    pub fn new(path: &'a str, delimiter: &'a str) -> Self {
        let split_inside = !delimiter.is_empty() && delimiter != "/";
        let mut words = Vec::new();
        let mut ends = Vec::new();
        let mut offset = 0;
        for segment in path.split('/') {
            if split_inside {
                let mut start = offset;
                for word in segment.split(delimiter) {
                    if !word.is_empty() {
                        words.push(word);
                        ends.push(start + word.len());
                    }
                    start += word.len() + delimiter.len();
                }
            } else if !segment.is_empty() {
                words.push(segment);
                ends.push(offset + segment.len());
            }
            offset += segment.len() + 1;
        }
        Self {
            path,
            delimiter,
            words,
            ends,
        }
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// What follows the first `consumed` words, as non-empty segments joined
    /// by `/`. Empty when nothing remains.
    pub fn parameter_path(&self, consumed: usize) -> String {
        let rest = match consumed.checked_sub(1) {
            None => self.path,
            Some(last) => match self.ends.get(last) {
                Some(&end) => &self.path[end..],
                None => return String::new(),
            },
        };
        let rest = rest.strip_prefix(self.delimiter).unwrap_or(rest);
        rest.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("/")
    }
}
