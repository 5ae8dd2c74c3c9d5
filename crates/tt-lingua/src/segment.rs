//! Word segmentation with force tokens split off as standalone words.

use regex::Regex;

/// One unit of selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// Force tokens are always kept and never scored against the threshold.
    pub forced: bool,
    /// Whether whitespace preceded this word in the source text.
    pub space_before: bool,
}

impl Word {
    fn new(text: impl Into<String>, forced: bool, space_before: bool) -> Self {
        Self { text: text.into(), forced, space_before }
    }

    pub fn is_newline(&self) -> bool {
        self.text == "\n"
    }
}

pub struct Segmenter {
    newline_forced: bool,
    inline: Option<Regex>,
}

impl Segmenter {
    pub fn new(force_tokens: &[String]) -> Result<Self, regex::Error> {
        let mut inline: Vec<&str> = force_tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
            .collect();
        // Longest first so multi-char tokens win over their prefixes.
        inline.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        inline.dedup();
        let inline = if inline.is_empty() {
            None
        } else {
            let pattern = inline.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
            Some(Regex::new(&pattern)?)
        };
        Ok(Self {
            newline_forced: force_tokens.iter().any(|t| t == "\n"),
            inline,
        })
    }

    pub fn segment(&self, text: &str) -> Vec<Word> {
        let mut words = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                words.push(Word::new("\n", self.newline_forced, false));
            }
            for (j, chunk) in line.split_whitespace().enumerate() {
                self.split_chunk(chunk, j > 0, &mut words);
            }
        }
        words
    }

    fn split_chunk(&self, chunk: &str, space_before: bool, out: &mut Vec<Word>) {
        let Some(re) = &self.inline else {
            out.push(Word::new(chunk, false, space_before));
            return;
        };
        let mut space = space_before;
        let mut last = 0;
        for m in re.find_iter(chunk) {
            if m.start() > last {
                out.push(Word::new(&chunk[last..m.start()], false, space));
                space = false;
            }
            out.push(Word::new(m.as_str(), true, space));
            space = false;
            last = m.end();
        }
        if last < chunk.len() {
            out.push(Word::new(&chunk[last..], false, space));
        }
    }
}

/// Join the kept words back into text.
///
/// A dropped newline still separates its neighbours with a space.
pub fn reassemble(words: &[Word], keep: &[bool]) -> String {
    let mut out = String::new();
    let mut dropped_newline = false;
    for (word, &kept) in words.iter().zip(keep) {
        if !kept {
            dropped_newline |= word.is_newline();
            continue;
        }
        let after_newline = out.ends_with('\n');
        if !out.is_empty() && !after_newline && !word.is_newline() && (word.space_before || dropped_newline) {
            out.push(' ');
        }
        out.push_str(&word.text);
        dropped_newline = false;
    }
    out.trim().to_string()
}
