use crate::search::{Diary, Emitter, PairClass};
use itertools::Itertools;
use std::io::Write;

/// Renders each diary in the classic text format: adjacency summary, the
/// per-column move tags, and every leaf word with its lexicographic rank.
/// `_` stands in for a newline so one diary stays on one line, which keeps
/// the stream easy to feed through sort and grep.
pub struct ReportPrinter<W: Write> {
  out: W,
  count: usize,
}

impl<W: Write> ReportPrinter<W> {
  pub fn new(out: W) -> Self {
    ReportPrinter { out, count: 0 }
  }

  pub fn count(&self) -> usize {
    self.count
  }
}

impl<W: Write> Emitter for ReportPrinter<W> {
  fn emit(&mut self, diary: &Diary) {
    self.count += 1;
    let mut line = String::from("_Adj. matrix: ");
    for i in 1..diary.leafs.len() {
      for j in 0..i {
        line.push(match diary.relation(i, j) {
          PairClass::Precedes => 'l',
          PairClass::Succeeds => 'g',
          PairClass::Incomparable => 'i',
        });
      }
      if i + 1 < diary.leafs.len() {
        line.push_str("_             ");
      }
    }
    line.push_str(&format!("_level types: {}", diary.trace.iter().join("")));
    for (i, (leaf, pos)) in diary.leafs.iter().zip(diary.lex_positions()).enumerate() {
      line.push_str(&format!("_vertex   {:2}: {} (lexpos {})", i, leaf, pos));
    }
    writeln!(self.out, "{}", line).unwrap();
  }
}

/// Streams every diary as one bincode record of (leaf words, trace).
pub struct BincodeSink<W: Write> {
  out: W,
  count: usize,
}

impl<W: Write> BincodeSink<W> {
  pub fn new(out: W) -> Self {
    BincodeSink { out, count: 0 }
  }

  pub fn count(&self) -> usize {
    self.count
  }
}

impl<W: Write> Emitter for BincodeSink<W> {
  fn emit(&mut self, diary: &Diary) {
    self.count += 1;
    bincode::serialize_into(&mut self.out, &(diary.leafs, diary.trace)).unwrap();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::basics::{MoveTag, Word};
  use crate::search::{Config, Search};

  #[test]
  fn report_matches_the_reference_two_leaf_output() {
    let mut out = Vec::new();
    let mut printer = ReportPrinter::new(&mut out);
    Search::new(Config::new(2, false, false), &mut printer).run();
    assert_eq!(printer.count(), 5);
    drop(printer);
    let expected = "\
_Adj. matrix: _level types: l_vertex    0:  (lexpos 0)
_Adj. matrix: i_level types: bpll_vertex    0: OR (lexpos 0)_vertex    1: ROO (lexpos 1)
_Adj. matrix: i_level types: bpll_vertex    0: RO (lexpos 1)_vertex    1: ORO (lexpos 0)
_Adj. matrix: g_level types: b<ll_vertex    0: OL (lexpos 0)_vertex    1: RRO (lexpos 1)
_Adj. matrix: l_level types: b<ll_vertex    0: RR (lexpos 1)_vertex    1: OLO (lexpos 0)
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
  }

  #[test]
  fn bincode_stream_decodes_back() {
    let mut out = Vec::new();
    let mut sink = BincodeSink::new(&mut out);
    Search::new(Config::new(1, false, false), &mut sink).run();
    assert_eq!(sink.count(), 1);
    drop(sink);
    let record: (Vec<Word>, Vec<MoveTag>) = bincode::deserialize(&out).unwrap();
    assert_eq!(record, (vec![Word::default()], vec![MoveTag::Leaf]));
  }
}
