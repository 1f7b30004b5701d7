mod encoder;

pub(crate) mod galois;
pub(crate) mod poly;

pub(crate) use encoder::*;
