// Direction-aware win decision for a single category value.

use crate::catalog::{CategorySpec, Direction};

/// True iff `candidate` is strictly better than every opponent value under
/// the category's direction. A missing or NaN candidate never wins; a
/// missing or NaN opponent can never be beaten, so its presence forces a
/// loss. Equal values are not a win.
///
/// Written against a slice of opponents so larger matchup formats work
/// unchanged; the two-team comparison passes a single opponent.
pub fn decide(spec: &CategorySpec, candidate: Option<f64>, opponents: &[Option<f64>]) -> bool {
    let Some(value) = candidate.filter(|v| v.is_finite()) else {
        return false;
    };
    opponents
        .iter()
        .copied()
        .all(|opp| match opp.filter(|v| v.is_finite()) {
            Some(other) => match spec.direction {
                Direction::HigherIsBetter => value > other,
                Direction::LowerIsBetter => value < other,
            },
            None => false,
        })
}
