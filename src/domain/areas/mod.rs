pub mod comparator;
pub mod source;
