//! Lazy enumeration of curve points.

use crate::{Curve, Point};
use alloc::vec::{self, Vec};
use core::iter::FusedIterator;
use num_bigint::BigInt;
use num_traits::Zero;
use rand_core::RngCore;

/// Iterator over every point of a [`Curve`].
///
/// Yields the identity first, then for each `x` in `0..p` the points returned
/// by [`Curve::lift_x`]. Nothing is computed ahead of the caller, so taking a
/// prefix of the sequence on a large curve is cheap.
#[derive(Clone, Debug)]
pub struct Points<'c, R> {
    curve: &'c Curve,
    rng: R,
    next_x: BigInt,
    started: bool,
    pending: vec::IntoIter<Point<'c>>,
}

impl<'c, R: RngCore> Points<'c, R> {
    pub(crate) fn new(curve: &'c Curve, rng: R) -> Self {
        Self {
            curve,
            rng,
            next_x: BigInt::zero(),
            started: false,
            pending: Vec::new().into_iter(),
        }
    }
}

impl<'c, R: RngCore> Iterator for Points<'c, R> {
    type Item = Point<'c>;

    fn next(&mut self) -> Option<Point<'c>> {
        if !self.started {
            self.started = true;
            return Some(self.curve.identity());
        }

        loop {
            if let Some(point) = self.pending.next() {
                return Some(point);
            }

            if &self.next_x >= self.curve.p() {
                return None;
            }

            self.pending = self.curve.lift_x(self.next_x.clone(), &mut self.rng).into_iter();
            self.next_x += 1u32;
        }
    }
}

impl<R: RngCore> FusedIterator for Points<'_, R> {}
