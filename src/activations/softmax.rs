//! Softmax and log-softmax over one or more axes.
//!
//! Selected axes are normalized jointly: they are moved to the end, flattened
//! into a single reduction row per combination of the remaining axes, and the
//! permutation is undone afterwards.

use ndarray::parallel::prelude::*;
use ndarray::{Array, Array2, ArrayBase, ArrayViewMut1, Axis, Data, Dimension, IxDyn, NdFloat};
use serde::{Deserialize, Serialize};

use super::elementwise::PARALLEL_THRESHOLD;
use crate::error::{ActivationError, Result};

/// Axis selection for the softmax family. Negative axes count from the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSpec {
    Single(isize),
    Multiple(Vec<isize>),
}

impl Default for AxisSpec {
    fn default() -> Self {
        AxisSpec::Single(-1)
    }
}

impl From<isize> for AxisSpec {
    fn from(axis: isize) -> Self {
        AxisSpec::Single(axis)
    }
}

impl From<i32> for AxisSpec {
    fn from(axis: i32) -> Self {
        AxisSpec::Single(axis as isize)
    }
}

impl From<Vec<isize>> for AxisSpec {
    fn from(axes: Vec<isize>) -> Self {
        AxisSpec::Multiple(axes)
    }
}

impl From<Vec<i32>> for AxisSpec {
    fn from(axes: Vec<i32>) -> Self {
        AxisSpec::Multiple(axes.into_iter().map(|a| a as isize).collect())
    }
}

impl From<&[isize]> for AxisSpec {
    fn from(axes: &[isize]) -> Self {
        AxisSpec::Multiple(axes.to_vec())
    }
}

impl<const N: usize> From<[isize; N]> for AxisSpec {
    fn from(axes: [isize; N]) -> Self {
        AxisSpec::Multiple(axes.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for AxisSpec {
    fn from(axes: [i32; N]) -> Self {
        AxisSpec::Multiple(axes.iter().map(|&a| a as isize).collect())
    }
}

impl AxisSpec {
    /// Resolve against an array of rank `ndim` into sorted, distinct axes.
    pub fn resolve(&self, ndim: usize) -> Result<Vec<usize>> {
        let requested: &[isize] = match self {
            AxisSpec::Single(axis) => std::slice::from_ref(axis),
            AxisSpec::Multiple(axes) => axes,
        };
        if requested.is_empty() {
            return Err(ActivationError::EmptyAxes);
        }

        let rank = ndim as isize;
        let mut axes = Vec::with_capacity(requested.len());
        for &axis in requested {
            let resolved = if axis < 0 { axis + rank } else { axis };
            if resolved < 0 || resolved >= rank {
                return Err(ActivationError::invalid_axis(axis, ndim));
            }
            let resolved = resolved as usize;
            if axes.contains(&resolved) {
                return Err(ActivationError::DuplicateAxis { axis: resolved });
            }
            axes.push(resolved);
        }
        axes.sort_unstable();
        Ok(axes)
    }
}

/// `exp(x - max) / sum(exp(x - max))` over the selected axes.
pub fn softmax<A, S, D>(x: &ArrayBase<S, D>, axis: impl Into<AxisSpec>) -> Result<Array<A, D>>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    reduce_over_axes(x, &axis.into(), softmax_lane)
}

/// `(x - max) - ln(sum(exp(x - max)))` over the selected axes.
pub fn log_softmax<A, S, D>(x: &ArrayBase<S, D>, axis: impl Into<AxisSpec>) -> Result<Array<A, D>>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    reduce_over_axes(x, &axis.into(), log_softmax_lane)
}

fn reduce_over_axes<A, S, D, F>(x: &ArrayBase<S, D>, axis: &AxisSpec, kernel: F) -> Result<Array<A, D>>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
    F: Fn(ArrayViewMut1<'_, A>) + Sync + Send,
{
    let input = x.view().into_dyn();
    let shape = input.shape().to_vec();
    let ndim = shape.len();

    let reduced = axis.resolve(ndim).map_err(|err| {
        log::debug!("rejected axis selection {:?} for shape {:?}: {}", axis, shape, err);
        err
    })?;
    let kept: Vec<usize> = (0..ndim).filter(|a| !reduced.contains(a)).collect();
    let order: Vec<usize> = kept.iter().chain(reduced.iter()).copied().collect();
    let outer: usize = kept.iter().map(|&a| shape[a]).product();
    let inner: usize = reduced.iter().map(|&a| shape[a]).product();

    let permuted = input.permuted_axes(IxDyn(&order));
    let mut rows = Array2::from_shape_vec((outer, inner), permuted.iter().copied().collect())?;

    if rows.len() >= PARALLEL_THRESHOLD {
        log::trace!("parallel reduction over {} rows of {}", outer, inner);
        rows.axis_iter_mut(Axis(0))
            .into_par_iter()
            .for_each(|row| kernel(row));
    } else {
        rows.axis_iter_mut(Axis(0)).for_each(|row| kernel(row));
    }

    let permuted_shape: Vec<usize> = order.iter().map(|&a| shape[a]).collect();
    let mut inverse = vec![0; ndim];
    for (position, &a) in order.iter().enumerate() {
        inverse[a] = position;
    }

    let restored = rows
        .into_shape(IxDyn(&permuted_shape))?
        .permuted_axes(IxDyn(&inverse));
    let output = restored.as_standard_layout().into_owned();
    Ok(output.into_dimensionality::<D>()?)
}

/// Row maximum, or zero when it is not finite.
fn stable_shift<A: NdFloat>(lane: &ArrayViewMut1<'_, A>) -> A {
    let max = lane.fold(A::neg_infinity(), |acc, &v| acc.max(v));
    if max.is_finite() {
        max
    } else {
        A::zero()
    }
}

fn softmax_lane<A: NdFloat>(mut lane: ArrayViewMut1<'_, A>) {
    let shift = stable_shift(&lane);
    lane.mapv_inplace(|v| (v - shift).exp());
    let total = lane.sum();
    lane.mapv_inplace(|v| v / total);
}

fn log_softmax_lane<A: NdFloat>(mut lane: ArrayViewMut1<'_, A>) {
    let shift = stable_shift(&lane);
    let log_total = lane.fold(A::zero(), |acc, &v| acc + (v - shift).exp()).ln();
    lane.mapv_inplace(|v| v - shift - log_total);
}
