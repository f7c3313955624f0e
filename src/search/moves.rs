use super::{ActiveType, Emitter, Search};
use crate::basics::{Letter, MoveTag, MAX_LEAFS_LIMIT};
use arrayvec::ArrayVec;

impl<E: Emitter> Search<'_, E> {
  /// Freeze every fully-related element in turn. The element that empties
  /// the active set completes a diary; it is reported and rolled back
  /// instead of recursed on.
  pub(super) fn do_leaf(&mut self) {
    if self.leafs.len() == self.config.max_leafs || self.types.is_empty() {
      return;
    }
    for i in 0..self.types.len() {
      if self.types[i].relations != self.types.len() - 1 {
        continue;
      }
      if self.types.len() == 1 {
        let word = self.types[i].word.clone();
        self.leafs.push(word);
        self.trace.push(MoveTag::Leaf);
        self.emit();
        self.trace.pop();
        self.leafs.pop();
        continue;
      }
      let leafed = self.types.remove(i);
      self.leafs.push(leafed.word);
      // Every survivor loses exactly one peer.
      for t in self.types.iter_mut() {
        t.relations -= 1;
        t.word.0.push(Letter::O);
      }
      self.trace.push(MoveTag::Leaf);

      self.recurse();

      self.trace.pop();
      for t in self.types.iter_mut() {
        t.relations += 1;
        t.word.0.pop();
      }
      let relations = self.types.len();
      let word = self.leafs.pop().unwrap();
      self.types.insert(i, ActiveType { word, relations });
    }
  }

  /// Split each active element into two copies, tagging everything before
  /// the split O and everything after it R at the new column.
  pub(super) fn do_branch(&mut self) {
    let ntypes = self.types.len();
    if ntypes >= self.config.max_types() || ntypes + self.leafs.len() >= self.config.max_leafs {
      return;
    }
    // Every still-unrelated active pair needs a column of its own before
    // any element can be frozen; give up early when they cannot fit.
    let (nprec, nperp) = self.relation_totals();
    if self.depth() + ntypes * (ntypes - 1) - nprec - nperp >= self.config.max_length() {
      return;
    }
    for i in 0..ntypes {
      let mut right = self.types[i].clone();
      right.word.0.push(Letter::R);
      for (k, t) in self.types.iter_mut().enumerate() {
        t.word.0.push(if k <= i { Letter::O } else { Letter::R });
      }
      self.types.insert(i + 1, right);
      // Peers related to the split element are now also related to its
      // fresh copy; the copy itself inherited the split element's counter
      // and the two copies are unrelated to each other.
      let bumped: ArrayVec<usize, MAX_LEAFS_LIMIT> = (0..i)
        .filter(|&k| self.related(k, i))
        .chain((i + 2..self.types.len()).filter(|&k| self.related(i, k)))
        .collect();
      for &k in bumped.iter() {
        self.types[k].relations += 1;
      }
      self.trace.push(MoveTag::Branch);

      self.recurse();

      self.trace.pop();
      for &k in bumped.iter() {
        self.types[k].relations -= 1;
      }
      self.types.remove(i + 1);
      for t in self.types.iter_mut() {
        t.word.0.pop();
      }
    }
  }

  /// Declare a new perp between every eligible unrelated pair.
  pub(super) fn do_perp(&mut self) {
    let before = if self.config.check { Some(self.relation_totals()) } else { None };
    for i in 0..self.types.len() {
      for j in i + 1..self.types.len() {
        if self.related(i, j) {
          continue;
        }
        // Condition (A): everything strictly between must already be perp
        // with one of the two ends.
        if !(i + 1..j).all(|k| self.perp_types(i, k) || self.perp_types(k, j)) {
          continue;
        }
        let column: ArrayVec<Letter, MAX_LEAFS_LIMIT> = (0..self.types.len())
          .map(|k| {
            if k < i {
              Letter::O
            } else if k == i {
              Letter::R
            } else if k < j {
              if self.perp_types(i, k) {
                Letter::O
              } else {
                Letter::R
              }
            } else if k == j {
              Letter::O
            } else {
              Letter::R
            }
          })
          .collect();
        self.apply_column(&column, MoveTag::Perp, i, j);
        if let Some((nprec, nperp)) = before {
          self.check_delta("perp", (nprec, nperp + 1));
        }

        self.recurse();

        self.undo_column(i, j);
      }
    }
  }

  /// Declare a new prec between every eligible unrelated pair.
  pub(super) fn do_prec(&mut self) {
    let before = if self.config.check { Some(self.relation_totals()) } else { None };
    for i in 0..self.types.len() {
      for j in i + 1..self.types.len() {
        if self.related(i, j) {
          continue;
        }
        // Conditions (B1) and (B2): elements before i must be perp with i
        // or precede j; elements after j must be perp with j or be
        // preceded by i.
        if !(0..i).all(|k| self.perp_types(k, i) || self.prec_types(k, j)) {
          continue;
        }
        if !(j + 1..self.types.len()).all(|k| self.perp_types(j, k) || self.prec_types(i, k)) {
          continue;
        }
        let column: ArrayVec<Letter, MAX_LEAFS_LIMIT> = (0..self.types.len())
          .map(|k| {
            if k < i {
              if self.perp_types(k, i) {
                Letter::O
              } else {
                Letter::L
              }
            } else if k == i {
              Letter::L
            } else if k < j {
              Letter::O
            } else if k == j {
              Letter::R
            } else if self.perp_types(j, k) {
              Letter::O
            } else {
              Letter::R
            }
          })
          .collect();
        self.apply_column(&column, MoveTag::Prec, i, j);
        if let Some((nprec, nperp)) = before {
          self.check_delta("prec", (nprec + 1, nperp));
        }

        self.recurse();

        self.undo_column(i, j);
      }
    }
  }

  /// Append one relation column and charge the new relation to `i` and `j`.
  fn apply_column(&mut self, column: &[Letter], tag: MoveTag, i: usize, j: usize) {
    for (t, &letter) in self.types.iter_mut().zip(column) {
      t.word.0.push(letter);
    }
    self.types[i].relations += 1;
    self.types[j].relations += 1;
    self.trace.push(tag);
  }

  fn undo_column(&mut self, i: usize, j: usize) {
    self.trace.pop();
    self.types[i].relations -= 1;
    self.types[j].relations -= 1;
    for t in self.types.iter_mut() {
      t.word.0.pop();
    }
  }
}
