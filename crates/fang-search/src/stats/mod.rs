//! Pure numeric primitives: tail-conditioned moments and the Fisher-z
//! asymmetry test. No shared state.

pub mod asymmetry;
pub mod correlation;

pub use asymmetry::{asymmetry_p_value, asymmetry_t, fisher_z, sign};
pub use correlation::{tail_correlation, TailCondition, TailMoments};
