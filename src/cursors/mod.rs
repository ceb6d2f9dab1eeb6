pub mod atomic;

pub use atomic::AtomicCursor;

/// Cursor over narrow (`ascii`, `iso8859_1`, `standard`) input
pub type NarrowCursor<'code> = AtomicCursor<'code, u8>;

/// Cursor over `standard_wide` input
pub type WideCursor<'code> = AtomicCursor<'code, char>;

/// Cursor over `unicode` (UTF-32) input
pub type UnicodeCursor<'code> = AtomicCursor<'code, u32>;
