//! Static reference data.
//!
//! Everything here is `const`/`static` and never mutated after startup:
//!
//! - the 60-pillar Nayin table (`nayin`)
//! - the four zodiac relation tables and the generation cycle (`relations`)

pub mod nayin;
pub mod relations;

pub use nayin::*;
pub use relations::*;
