use crate::basics::{ltlex, max_length, perp, prec, MoveTag, Word, MAX_LEAFS_LIMIT, WORD_CAP};
use arrayvec::ArrayVec;

mod checker;
mod moves;

/// Fixed bounds and diagnostic switches of one run; set once before the
/// search starts and never changed.
#[derive(Clone, Copy, Debug)]
pub struct Config {
  pub max_leafs: usize,
  pub debug: bool,
  pub check: bool,
}

impl Config {
  pub fn new(max_leafs: usize, debug: bool, check: bool) -> Self {
    assert!(
      (1..=MAX_LEAFS_LIMIT).contains(&max_leafs),
      "max_leafs must be in 1..={}, got {}",
      MAX_LEAFS_LIMIT,
      max_leafs
    );
    Config { max_leafs, debug, check }
  }

  pub fn max_types(&self) -> usize {
    self.max_leafs
  }

  pub fn max_length(&self) -> usize {
    max_length(self.max_leafs)
  }
}

/// Completed object handed to the emitter: the leaf words in freezing
/// order plus the per-column move tags that produced them.
pub struct Diary<'a> {
  pub leafs: &'a [Word],
  pub trace: &'a [MoveTag],
}

/// How one leaf relates to another in a finished diary.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum PairClass {
  Precedes,
  Succeeds,
  Incomparable,
}

impl Diary<'_> {
  pub fn relation(&self, a: usize, b: usize) -> PairClass {
    if prec(&self.leafs[a], &self.leafs[b]) {
      PairClass::Precedes
    } else if prec(&self.leafs[b], &self.leafs[a]) {
      PairClass::Succeeds
    } else {
      PairClass::Incomparable
    }
  }

  /// Rank of every leaf in the lexicographic order of the leaf set.
  pub fn lex_positions(&self) -> ArrayVec<usize, MAX_LEAFS_LIMIT> {
    self
      .leafs
      .iter()
      .map(|w| self.leafs.iter().filter(|v| ltlex(v, w)).count())
      .collect()
  }
}

/// Consumer of completed diaries.
pub trait Emitter {
  fn emit(&mut self, diary: &Diary);
}

#[derive(Clone, Debug)]
struct ActiveType {
  word: Word,
  /// How many other active elements this one is related to, by prec or
  /// perp. Kept incrementally; recomputed by the checker.
  relations: usize,
}

/// Shared state of the exhaustive search. Every move generator restores it
/// exactly before returning, so one run leaves the seed state behind and
/// the search can be rerun at no cost.
pub struct Search<'e, E: Emitter> {
  config: Config,
  types: ArrayVec<ActiveType, MAX_LEAFS_LIMIT>,
  leafs: ArrayVec<Word, MAX_LEAFS_LIMIT>,
  trace: ArrayVec<MoveTag, WORD_CAP>,
  emitter: &'e mut E,
}

impl<'e, E: Emitter> Search<'e, E> {
  /// Seed the search with a single active element of empty word.
  pub fn new(config: Config, emitter: &'e mut E) -> Self {
    let mut types = ArrayVec::new();
    types.push(ActiveType { word: Word::default(), relations: 0 });
    Search { config, types, leafs: ArrayVec::new(), trace: ArrayVec::new(), emitter }
  }

  pub fn run(&mut self) {
    self.recurse();
  }

  fn depth(&self) -> usize {
    self.trace.len()
  }

  /// Offer all four moves at the current level, leaf first.
  fn recurse(&mut self) {
    if self.depth() >= self.config.max_length() {
      return;
    }
    if self.config.debug {
      self.print_state();
    }
    if self.config.check {
      self.verify();
    }
    self.do_leaf();
    if self.config.check {
      self.verify();
    }
    self.do_branch();
    if self.config.check {
      self.verify();
    }
    self.do_perp();
    if self.config.check {
      self.verify();
    }
    self.do_prec();
  }

  fn related(&self, i: usize, j: usize) -> bool {
    self.prec_types(i, j) || self.perp_types(i, j)
  }

  fn prec_types(&self, i: usize, j: usize) -> bool {
    prec(&self.types[i].word, &self.types[j].word)
  }

  fn perp_types(&self, i: usize, j: usize) -> bool {
    perp(&self.types[i].word, &self.types[j].word)
  }

  fn emit(&mut self) {
    let diary = Diary { leafs: &self.leafs, trace: &self.trace };
    self.emitter.emit(&diary);
  }
}
