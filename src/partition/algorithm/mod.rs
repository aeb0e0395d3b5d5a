mod optimize;
mod residual;
mod seed;

pub(crate) use optimize::MAX_OPTIMIZE_PASSES;
