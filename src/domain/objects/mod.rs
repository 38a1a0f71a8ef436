pub mod diff;
pub mod line;
pub mod normalize;

// Forward lookahead bound, in lines, used on each sequence when searching
// for a resynchronization point after a divergence.
pub const SYNC_WINDOW: usize = 10;
