pub mod numeric;

pub use numeric::ScalarNumeric;
pub(crate) use numeric::cast;
