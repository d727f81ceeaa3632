pub const DIGIT_BITS: usize = u8::BITS as usize;

/// Largest value served from the small-natural cache.
pub const MAX_CONSTANT: usize = 16;
