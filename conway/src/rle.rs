//! Decoder for the run-length encoded (RLE) pattern format used by Golly and
//! the LifeWiki, described here:
//! https://conwaylife.com/wiki/Run_Length_Encoded
//!
//! Only two-state patterns are supported. The body alphabet is `b` (dead),
//! `o` (alive), `$` (end of row) and `!` (end of pattern), each optionally
//! prefixed by a decimal run count.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::coords::to_index;
use crate::error::FormatError;

pub type ParseResult<T> = Result<T, FormatError>;

/// Rule recorded when neither `#r` nor the header names one.
pub const DEFAULT_RULE: &str = "R23/S3";

lazy_static! {
    static ref HEADER: Regex =
        Regex::new(r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,\s*rule\s*=\s*([\w/]+))?").unwrap();
}

/// A decoded, immutable rectangular pattern.
///
/// `cells` is row-major and always holds exactly `width * height` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,

    name: String,
    comment: String,
    created_by: String,
    rule: String,
}

impl Pattern {
    /// Builds a pattern from raw cells with empty metadata.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> ParseResult<Self> {
        if width == 0 || height == 0 {
            return Err(FormatError::EmptyDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(FormatError::EmptyDimensions { width, height })?;
        if cells.len() != expected {
            return Err(FormatError::LengthMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
            name: String::new(),
            comment: String::new(),
            created_by: String::new(),
            rule: DEFAULT_RULE.to_owned(),
        })
    }

    /// Decodes RLE text. See the module docs for the accepted format.
    pub fn decode(text: &str) -> ParseResult<Self> {
        decode(text)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
    /// Cell at `(x, y)`; both must be inside the pattern.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[to_index(x, y, self.width)]
    }
    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn comment(&self) -> &str {
        &self.comment
    }
    pub fn created_by(&self) -> &str {
        &self.created_by
    }
    /// Rule string as written in the file. Descriptive only; evolution
    /// always uses standard Life.
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

impl FromStr for Pattern {
    type Err = FormatError;

    fn from_str(s: &str) -> ParseResult<Self> {
        decode(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Metadata {
    name: String,
    comment: String,
    created_by: String,
    rule: Option<String>,
}

impl Metadata {
    fn push_comment(&mut self, text: &str) {
        if !self.comment.is_empty() {
            self.comment.push('\n');
        }
        self.comment.push_str(text);
    }
}

/// Decodes RLE text into a [`Pattern`].
pub fn decode(text: &str) -> ParseResult<Pattern> {
    let mut meta = Metadata::default();
    let mut size: Option<(usize, usize)> = None;
    // Body lines are logically concatenated; keeping them apart lets errors
    // name the line they came from.
    let mut body: Vec<(usize, &str)> = Vec::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("#C") {
            meta.push_comment(rest.trim());
        } else if let Some(rest) = line.strip_prefix("#N") {
            meta.name = rest.trim().to_owned();
        } else if let Some(rest) = line.strip_prefix("#O") {
            meta.created_by = rest.trim().to_owned();
        } else if let Some(rest) = line.strip_prefix("#r") {
            meta.rule = Some(rest.trim().to_owned());
        } else if line.starts_with('#') {
            debug!("Ignoring comment line {}: {}", line_no, line);
        } else if size.is_some() {
            body.push((line_no, line));
        } else if let Some(caps) = HEADER.captures(line) {
            size = Some(parse_header(&caps, line_no, line)?);
            if let Some(rule) = caps.get(3) {
                meta.rule = Some(rule.as_str().to_owned());
            }
        } else {
            return Err(FormatError::UnexpectedLine {
                line_no,
                line: line.to_owned(),
            });
        }
    }

    let (width, height) = size.ok_or(FormatError::MissingHeader)?;
    let cells = BodyDecoder::new(width, height).decode(&body)?;

    let mut pattern = Pattern::from_cells(width, height, cells)?;
    pattern.name = meta.name;
    pattern.comment = meta.comment;
    pattern.created_by = meta.created_by;
    if let Some(rule) = meta.rule {
        pattern.rule = rule;
    }
    Ok(pattern)
}

fn parse_header(caps: &Captures<'_>, line_no: usize, line: &str) -> ParseResult<(usize, usize)> {
    let malformed = |reason| FormatError::MalformedHeader {
        line_no,
        line: line.to_owned(),
        reason,
    };
    let width: usize = caps[1].parse().map_err(|_| malformed("width out of range"))?;
    let height: usize = caps[2].parse().map_err(|_| malformed("height out of range"))?;
    if width == 0 || height == 0 {
        return Err(malformed("dimensions must be positive"));
    }
    if width.checked_mul(height).is_none_or(|cells| cells > MAX_CELLS) {
        return Err(malformed("pattern too large"));
    }
    Ok((width, height))
}

/// Largest `width * height` a header may declare.
pub const MAX_CELLS: usize = 1 << 26;

// Headers are untrusted; don't reserve more than this up front.
const MAX_PREALLOC: usize = 1 << 20;

/// Left-to-right state machine over the concatenated body.
struct BodyDecoder {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    row: Vec<bool>,
    rows_done: usize,
    count: Option<usize>,
    last_token: Option<char>,
}

impl BodyDecoder {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Vec::with_capacity((width * height).min(MAX_PREALLOC)),
            row: Vec::with_capacity(width.min(MAX_PREALLOC)),
            rows_done: 0,
            count: None,
            last_token: None,
        }
    }

    fn decode(mut self, body: &[(usize, &str)]) -> ParseResult<Vec<bool>> {
        let mut terminated = false;

        'lines: for &(line_no, line) in body {
            for token in line.chars() {
                if token.is_whitespace() {
                    continue;
                }
                match token {
                    '0'..='9' => {
                        let digit = token as usize - '0' as usize;
                        let count = self
                            .count
                            .unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|c| c.checked_add(digit))
                            .ok_or(FormatError::CountOverflow { line_no })?;
                        self.count = Some(count);
                    }
                    'b' | 'o' => {
                        let run = self.take_count();
                        self.push_run(token == 'o', run, line_no)?;
                    }
                    '$' => {
                        let rows = self.take_count();
                        self.end_rows(rows, line_no)?;
                    }
                    '!' => {
                        self.finish(line_no)?;
                        terminated = true;
                        break 'lines;
                    }
                    _ => {
                        return Err(FormatError::UnexpectedToken {
                            token,
                            line_no,
                            line: line.to_owned(),
                        });
                    }
                }
                self.last_token = Some(token);
            }
        }

        // A body without `!` ends as if it had one.
        if !terminated {
            let line_no = body.last().map_or(0, |&(line_no, _)| line_no);
            self.finish(line_no)?;
        }

        Ok(self.cells)
    }

    fn take_count(&mut self) -> usize {
        self.count.take().unwrap_or(1)
    }

    fn push_run(&mut self, alive: bool, run: usize, line_no: usize) -> ParseResult<()> {
        let len = self.row.len().saturating_add(run);
        if len > self.width {
            return Err(FormatError::RowOverflow {
                row: self.rows_done,
                len,
                width: self.width,
                line_no,
            });
        }
        self.row.resize(len, alive);
        Ok(())
    }

    /// Flushes the current row padded to full width, followed by `rows - 1`
    /// fully dead rows.
    fn end_rows(&mut self, rows: usize, line_no: usize) -> ParseResult<()> {
        if rows > 0 {
            let total_rows = self.rows_done.saturating_add(rows);
            if total_rows > self.height {
                return Err(FormatError::LengthMismatch {
                    width: self.width,
                    height: self.height,
                    expected: self.width * self.height,
                    actual: total_rows.saturating_mul(self.width),
                });
            }
            debug_assert!(self.row.len() <= self.width, "row overflow on line {}", line_no);
            self.cells.extend_from_slice(&self.row);
            self.cells.resize(total_rows * self.width, false);
            self.rows_done = total_rows;
        } else if !self.row.is_empty() {
            debug!("line {}: `0$` discards {} pending cells", line_no, self.row.len());
        }
        self.row.clear();
        Ok(())
    }

    fn finish(&mut self, line_no: usize) -> ParseResult<()> {
        if self.last_token != Some('$') {
            self.end_rows(1, line_no)?;
        }
        Ok(())
    }
}
