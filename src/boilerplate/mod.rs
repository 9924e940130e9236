/*! Boilerplate Stripper

Removes digitization boilerplate — license blocks, scanner watermarks,
library stamps — inserted by Google Books, Internet Archive, HathiTrust,
JSTOR and Project Gutenberg. Operates line-oriented rather than on
substrings, because boilerplate is structurally a run of lines, and
removing a partial line risks splitting a word across the cut.

Two pattern kinds coexist (see [table]):

- **Block patterns**: a start marker and an end marker: everything between
  them, inclusive, is dropped.
- **Footprint patterns**: a single-line marker that also consumes a fixed
  number of neighbouring lines.

Stripping runs before OCR pattern substitution, so boilerplate text is
never modernized into a form later patterns no longer recognize.
!*/
mod table;

use serde::{Deserialize, Serialize};

/// A single removed line range, recorded for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrippedRegion {
    pub category: &'static str,
    pub pattern_name: &'static str,
    pub start_line: usize,
    pub end_line: usize,
    pub char_count: usize,
}

pub struct StripResult {
    pub text: String,
    pub stripped_regions: Vec<StrippedRegion>,
    pub total_chars_stripped: usize,
}

enum Kind {
    Block {
        start: regex::Regex,
        end: regex::Regex,
    },
    Footprint {
        marker: regex::Regex,
        before: usize,
        after: usize,
    },
    HeaderUpTo {
        marker: regex::Regex,
    },
    FooterFrom {
        marker: regex::Regex,
    },
}

struct CompiledPattern {
    category: &'static str,
    name: &'static str,
    kind: Kind,
}

pub struct BoilerplateStripper {
    patterns: Vec<CompiledPattern>,
}

impl BoilerplateStripper {
    pub fn new() -> Self {
        let patterns = table::raw_patterns()
            .into_iter()
            .map(|p| CompiledPattern {
                category: p.category,
                name: p.name,
                kind: match p.kind {
                    table::RawKind::Block { start, end } => Kind::Block {
                        start: regex::Regex::new(start).expect("static block-start regex"),
                        end: regex::Regex::new(end).expect("static block-end regex"),
                    },
                    table::RawKind::Footprint {
                        marker,
                        before,
                        after,
                    } => Kind::Footprint {
                        marker: regex::Regex::new(marker).expect("static footprint regex"),
                        before,
                        after,
                    },
                    table::RawKind::HeaderUpTo { marker } => Kind::HeaderUpTo {
                        marker: regex::Regex::new(marker).expect("static header regex"),
                    },
                    table::RawKind::FooterFrom { marker } => Kind::FooterFrom {
                        marker: regex::Regex::new(marker).expect("static footer regex"),
                    },
                },
            })
            .collect();
        Self { patterns }
    }

    /// Strips every matching region from `text`, earliest-defined pattern
    /// wins when two patterns would claim the same lines.
    pub fn strip(&self, text: &str) -> StripResult {
        let lines: Vec<&str> = text.lines().collect();
        let mut drop = vec![false; lines.len()];
        let mut regions = Vec::new();

        for pat in &self.patterns {
            match &pat.kind {
                Kind::Block { start, end } => {
                    let mut i = 0;
                    while i < lines.len() {
                        if !drop[i] && start.is_match(lines[i]) {
                            if let Some(end_idx) =
                                (i..lines.len()).find(|&j| end.is_match(lines[j]))
                            {
                                let char_count: usize =
                                    lines[i..=end_idx].iter().map(|l| l.chars().count() + 1).sum();
                                for j in i..=end_idx {
                                    drop[j] = true;
                                }
                                regions.push(StrippedRegion {
                                    category: pat.category,
                                    pattern_name: pat.name,
                                    start_line: i,
                                    end_line: end_idx,
                                    char_count,
                                });
                                i = end_idx + 1;
                                continue;
                            }
                        }
                        i += 1;
                    }
                }
                Kind::Footprint {
                    marker,
                    before,
                    after,
                } => {
                    for i in 0..lines.len() {
                        if drop[i] || !marker.is_match(lines[i]) {
                            continue;
                        }
                        let start_line = i.saturating_sub(*before);
                        let end_line = (i + after).min(lines.len() - 1);
                        if (start_line..=end_line).any(|j| drop[j]) {
                            continue;
                        }
                        let char_count: usize = lines[start_line..=end_line]
                            .iter()
                            .map(|l| l.chars().count() + 1)
                            .sum();
                        for j in start_line..=end_line {
                            drop[j] = true;
                        }
                        regions.push(StrippedRegion {
                            category: pat.category,
                            pattern_name: pat.name,
                            start_line,
                            end_line,
                            char_count,
                        });
                    }
                }
                Kind::HeaderUpTo { marker } => {
                    if let Some(end_idx) = lines.iter().position(|l| marker.is_match(l)) {
                        if !(0..=end_idx).any(|j| drop[j]) {
                            let char_count: usize =
                                lines[0..=end_idx].iter().map(|l| l.chars().count() + 1).sum();
                            for j in 0..=end_idx {
                                drop[j] = true;
                            }
                            regions.push(StrippedRegion {
                                category: pat.category,
                                pattern_name: pat.name,
                                start_line: 0,
                                end_line: end_idx,
                                char_count,
                            });
                        }
                    }
                }
                Kind::FooterFrom { marker } => {
                    if let Some(start_idx) = lines.iter().position(|l| marker.is_match(l)) {
                        let last = lines.len() - 1;
                        if !(start_idx..=last).any(|j| drop[j]) {
                            let char_count: usize = lines[start_idx..=last]
                                .iter()
                                .map(|l| l.chars().count() + 1)
                                .sum();
                            for j in start_idx..=last {
                                drop[j] = true;
                            }
                            regions.push(StrippedRegion {
                                category: pat.category,
                                pattern_name: pat.name,
                                start_line: start_idx,
                                end_line: last,
                                char_count,
                            });
                        }
                    }
                }
            }
        }

        regions.sort_by_key(|r| r.start_line);
        let total_chars_stripped = regions.iter().map(|r| r.char_count).sum();

        let kept: Vec<&str> = lines
            .iter()
            .zip(drop.iter())
            .filter(|(_, d)| !**d)
            .map(|(l, _)| *l)
            .collect();

        StripResult {
            text: kept.join("\n"),
            stripped_regions: regions,
            total_chars_stripped,
        }
    }
}

impl Default for BoilerplateStripper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_google_books_watermark_block() {
        let stripper = BoilerplateStripper::new();
        let text = "Digitized by Google\nThis book is provided for personal use.\nhttps://books.google.com/books?id=abc123\nThe first chapter begins here.\nAnd it continues.";
        let result = stripper.strip(text);
        assert_eq!(result.stripped_regions.len(), 1);
        let region = &result.stripped_regions[0];
        assert_eq!(region.category, "google_books");
        assert_eq!(region.start_line, 0);
        assert_eq!(region.end_line, 2);
        assert_eq!(result.text, "The first chapter begins here.\nAnd it continues.");
    }

    #[test]
    fn strips_gutenberg_header_and_footer() {
        let stripper = BoilerplateStripper::new();
        let text = "Title: Foo\nAuthor: Bar\n*** START OF THE PROJECT GUTENBERG EBOOK FOO ***\nActual content begins.\nAnd continues.\n*** END OF THE PROJECT GUTENBERG EBOOK FOO ***\nLicense text follows.";
        let result = stripper.strip(text);
        assert_eq!(result.text, "Actual content begins.\nAnd continues.");
        assert!(result
            .stripped_regions
            .iter()
            .all(|r| r.category == "gutenberg"));
        assert_eq!(result.stripped_regions.len(), 2);
    }

    #[test]
    fn leaves_plain_text_untouched() {
        let stripper = BoilerplateStripper::new();
        let text = "Just an ordinary paragraph of plain prose.\nNothing to strip here.";
        let result = stripper.strip(text);
        assert!(result.stripped_regions.is_empty());
        assert_eq!(result.text, text);
        assert_eq!(result.total_chars_stripped, 0);
    }

    #[test]
    fn monotonicity_output_never_longer_than_input() {
        let stripper = BoilerplateStripper::new();
        let text = "Digitized by Google\nThis book is provided for personal use.\nhttps://books.google.com/books?id=xyz\nReal content follows.";
        let result = stripper.strip(text);
        assert!(result.text.len() <= text.len());
    }
}
