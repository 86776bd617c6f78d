use cursor::Col;
use scanner::Operator;

use crate::builder::Item;

#[derive(Debug, PartialEq)]
pub(crate) enum Piece {
    /// Operands joined by `*` and `/` only. `end` is the column of whatever follows it.
    Segment { items: Vec<Item>, end: Col },
    Term { operator: Operator, col: Col },
}

/// Cuts `items` at every top-level `+`/`-`, leaving `*`/`/` inside the segments.
///
/// Empty segments are dropped, so an operator with nothing before it stays
/// visible to the builder as a missing operand.
pub(crate) fn split_terms(items: Vec<Item>, end: Col) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut segment = Vec::new();

    for item in items {
        match item {
            Item::Operator { operator, col } if operator.is_term() => {
                if !segment.is_empty() {
                    pieces.push(Piece::Segment { items: std::mem::take(&mut segment), end: col });
                }
                pieces.push(Piece::Term { operator, col });
            }
            item => segment.push(item),
        }
    }

    if !segment.is_empty() {
        pieces.push(Piece::Segment { items: segment, end });
    }

    pieces
}
