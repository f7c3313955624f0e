use super::{Emitter, Search};
use crate::basics::{ltlex, perp, prec, MAX_LEAFS_LIMIT};
use itertools::Itertools;

impl<E: Emitter> Search<'_, E> {
  /// Total prec and perp relations over the active pairs, recomputed from
  /// the words. The branch feasibility bound needs this in every mode.
  pub(super) fn relation_totals(&self) -> (usize, usize) {
    let mut nprec = 0;
    let mut nperp = 0;
    for (a, b) in self.types.iter().tuple_combinations() {
      if prec(&a.word, &b.word) {
        nprec += 1;
      } else if perp(&a.word, &b.word) {
        nperp += 1;
      }
    }
    (nprec, nperp)
  }

  /// Recompute everything the moves maintain incrementally and abort on
  /// any disagreement. Slow; enabled by the check switch only.
  pub(super) fn verify(&self) {
    for (i, t) in self.types.iter().enumerate() {
      if t.word.0.len() != self.depth() {
        eprintln!("type {} has length {}, depth is {}", i, t.word.0.len(), self.depth());
        self.print_state();
        panic!("word length mismatch");
      }
      if i > 0 && !ltlex(&self.types[i - 1].word, &t.word) {
        eprintln!("types {} and {} out of lexicographic order", i - 1, i);
        self.print_state();
        panic!("active list not sorted");
      }
    }
    let mut recounted = [0usize; MAX_LEAFS_LIMIT];
    for ((i, a), (j, b)) in self.types.iter().enumerate().tuple_combinations() {
      if prec(&a.word, &b.word) || perp(&a.word, &b.word) {
        recounted[i] += 1;
        recounted[j] += 1;
      }
    }
    for (i, t) in self.types.iter().enumerate() {
      if t.relations != recounted[i] {
        eprintln!("type {} caches {} relations, recounted {}", i, t.relations, recounted[i]);
        self.print_state();
        panic!("relation counter mismatch");
      }
    }
  }

  /// Abort unless the relation totals moved to exactly `expected`.
  pub(super) fn check_delta(&self, mv: &str, expected: (usize, usize)) {
    let got = self.relation_totals();
    if got != expected {
      eprintln!("{} move left relation totals at {:?}, expected {:?}", mv, got, expected);
      self.print_state();
      panic!("{} move changed the wrong relations", mv);
    }
  }

  /// Trace plus every active and leaf word, one per line on stderr.
  pub(super) fn print_state(&self) {
    eprintln!("Seq:{}", self.trace.iter().join(""));
    for t in self.types.iter() {
      eprintln!("Type {}", t.word);
    }
    for leaf in self.leafs.iter() {
      eprintln!("Leaf {}", leaf);
    }
    eprintln!();
  }
}
