use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Hard cap on the runtime leaf bound; sizes every buffer of the search.
pub const MAX_LEAFS_LIMIT: usize = 8;

/// Columns a search bounded by `max_leafs` can ever need: one per
/// branching, one per pairwise relation, one per leaf, plus two slack.
pub const fn max_length(max_leafs: usize) -> usize {
  max_leafs - 1 + max_leafs * (max_leafs - 1) / 2 + max_leafs + 2
}

pub const WORD_CAP: usize = max_length(MAX_LEAFS_LIMIT);

/// The paper's alphabet, L < X < R. X is written O so that words sort
/// alphabetically in ascii and read better in reports.
#[derive(Serialize, Deserialize, Hash, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Letter {
  L = 0,
  O = 1,
  R = 2,
}

impl std::fmt::Display for Letter {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Letter::L => 'L',
        Letter::O => 'O',
        Letter::R => 'R',
      }
    )
  }
}

/// One element's accumulated column history.
#[derive(Serialize, Deserialize, Hash, Clone, Eq, PartialEq, Debug, Default)]
pub struct Word(pub ArrayVec<Letter, WORD_CAP>);

impl std::fmt::Display for Word {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    for letter in self.0.iter() {
      write!(f, "{}", letter)?;
    }
    Ok(())
  }
}

impl std::str::FromStr for Word {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() > WORD_CAP {
      return Err(format!("word longer than {} letters", WORD_CAP));
    }
    s.chars()
      .map(|c| match c {
        'L' => Ok(Letter::L),
        'O' => Ok(Letter::O),
        'R' => Ok(Letter::R),
        _ => Err(format!("invalid letter {:?}", c)),
      })
      .collect::<Result<ArrayVec<_, WORD_CAP>, _>>()
      .map(Word)
  }
}

/// Kind of move that produced one column of the construction.
#[derive(Serialize, Deserialize, Hash, Clone, Copy, Eq, PartialEq, Debug)]
pub enum MoveTag {
  Branch,
  Leaf,
  Perp,
  Prec,
}

impl std::fmt::Display for MoveTag {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        MoveTag::Branch => 'b',
        MoveTag::Leaf => 'l',
        MoveTag::Perp => 'p',
        MoveTag::Prec => '<',
      }
    )
  }
}

/// \ltlex from the paper. Only the shared prefix is compared.
pub fn ltlex(s1: &Word, s2: &Word) -> bool {
  for (a, b) in s1.0.iter().zip(s2.0.iter()) {
    if a < b {
      return true;
    }
    if a > b {
      return false;
    }
  }
  false
}

/// \prec from the paper: some position carries L against R and no earlier
/// position reverses the order.
pub fn prec(s1: &Word, s2: &Word) -> bool {
  for (a, b) in s1.0.iter().zip(s2.0.iter()) {
    if a > b {
      return false;
    }
    if *a == Letter::L && *b == Letter::R {
      return true;
    }
  }
  false
}

/// \perp from the paper: some position orders the words one way and some
/// position the other way.
pub fn perp(s1: &Word, s2: &Word) -> bool {
  let mut f1 = false;
  let mut f2 = false;
  for (a, b) in s1.0.iter().zip(s2.0.iter()) {
    if a < b {
      f1 = true;
    }
    if a > b {
      f2 = true;
    }
    if f1 && f2 {
      return true;
    }
  }
  false
}

/// Compatibility conditions from the paper. No move gates on this; it is
/// kept because it belongs to the published rule set.
pub fn compatible(s1: &Word, s2: &Word) -> bool {
  let pairs = || s1.0.iter().zip(s2.0.iter());
  let first = pairs().find_map(|(a, b)| match (a, b) {
    (Letter::L, Letter::R) => Some(true),
    (Letter::R, Letter::L) => Some(false),
    _ => None,
  });
  match first {
    None => true,
    Some(true) => pairs().all(|(a, b)| a <= b),
    Some(false) => pairs().all(|(a, b)| a >= b),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn word(s: &str) -> Word {
    s.parse().unwrap()
  }

  #[test]
  fn letters_sort_like_the_paper() {
    assert!(Letter::L < Letter::O);
    assert!(Letter::O < Letter::R);
  }

  #[test]
  fn words_render_and_parse() {
    assert_eq!(word("LOR").to_string(), "LOR");
    assert_eq!(word("").to_string(), "");
    assert!("LOX".parse::<Word>().is_err());
  }

  #[test]
  fn ltlex_first_difference_decides() {
    assert!(ltlex(&word("LOR"), &word("LRL")));
    assert!(!ltlex(&word("LRL"), &word("LOR")));
    assert!(!ltlex(&word("LO"), &word("LOR")));
    assert!(!ltlex(&word("LO"), &word("LO")));
  }

  #[test]
  fn prec_needs_l_against_r_with_no_earlier_reversal() {
    assert!(prec(&word("LO"), &word("RO")));
    assert!(prec(&word("OL"), &word("RR")));
    assert!(!prec(&word("RL"), &word("OR")));
    assert!(!prec(&word("OO"), &word("RR")));
    assert!(!prec(&word("OL"), &word("OL")));
  }

  #[test]
  fn perp_needs_both_directions() {
    assert!(perp(&word("OR"), &word("RO")));
    assert!(perp(&word("RO"), &word("OR")));
    assert!(!perp(&word("OO"), &word("OR")));
    assert!(!perp(&word("LL"), &word("LL")));
  }

  #[test]
  fn prec_is_asymmetric_and_perp_symmetric() {
    let words = ["", "L", "O", "R", "LR", "RL", "OR", "RO", "OLO", "RRO"];
    for a in words.iter() {
      for b in words.iter() {
        let (a, b) = (word(a), word(b));
        assert!(!(prec(&a, &b) && prec(&b, &a)), "{} {}", a, b);
        assert_eq!(perp(&a, &b), perp(&b, &a), "{} {}", a, b);
      }
    }
  }

  #[test]
  fn compatible_matches_the_paper_conditions() {
    assert!(compatible(&word(""), &word("")));
    assert!(compatible(&word("OO"), &word("OR")));
    assert!(compatible(&word("LO"), &word("RO")));
    assert!(!compatible(&word("LR"), &word("RL")));
    assert!(compatible(&word("RO"), &word("LO")));
    assert!(!compatible(&word("RL"), &word("LR")));
  }
}
