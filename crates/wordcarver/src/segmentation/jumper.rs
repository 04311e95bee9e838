//! # Path Records

use crate::dictionary::Token;

/// Cost of a synthesized single-unit edge.
pub const FALLBACK_COST: f32 = 32.0;

/// Frequency reported for a synthesized single-unit segment.
pub const FALLBACK_FREQUENCY: u64 = 1;

/// Tag reported for a synthesized single-unit segment.
pub const FALLBACK_TAG: &str = "x";

/// The edge a path takes into a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PathEdge<'d> {
    /// A dictionary token covering `len` units.
    Known { len: usize, token: &'d Token },

    /// A synthesized single-unit edge.
    Fallback,
}

impl<'d> PathEdge<'d> {
    pub(crate) fn len(&self) -> usize {
        match self {
            PathEdge::Known { len, .. } => *len,
            PathEdge::Fallback => 1,
        }
    }

    pub(crate) fn token(&self) -> Option<&'d Token> {
        match self {
            PathEdge::Known { token, .. } => Some(token),
            PathEdge::Fallback => None,
        }
    }

    pub(crate) fn cost(&self) -> f32 {
        match self {
            PathEdge::Known { token, .. } => token.cost(),
            PathEdge::Fallback => FALLBACK_COST,
        }
    }
}

/// Best known way to reach one position.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Jumper<'d> {
    pub(crate) min_cost: Option<f32>,
    pub(crate) edge: Option<PathEdge<'d>>,
}

impl<'d> Jumper<'d> {
    /// Take `edge` if it strictly improves on the current best.
    ///
    /// Ties keep the earlier edge.
    pub(crate) fn relax(
        &mut self,
        base: f32,
        edge: PathEdge<'d>,
    ) {
        let candidate = base + edge.cost();
        if self.min_cost.is_none_or(|best| candidate < best) {
            self.min_cost = Some(candidate);
            self.edge = Some(edge);
        }
    }
}
