//! Centralized constants for the Inherit estimator.
//!
//! The height differential, tolerance band and fallback heights are transcribed
//! heuristics. They are kept in code so they can only change through reviewed
//! commits, never through the JSON assets.

// Height regression --------------------------------------------------------
/// Sex differential added (male) or subtracted (female) before averaging.
pub const HEIGHT_SEX_DIFFERENTIAL_CM: i32 = 13;
/// Half-width of the reported range around the point estimate.
pub const HEIGHT_TOLERANCE_CM: i32 = 8;
pub const DEFAULT_MOTHER_HEIGHT_CM: u16 = 165;
pub const DEFAULT_FATHER_HEIGHT_CM: u16 = 175;
/// Parent heights outside this window are treated as unusable input.
pub const HEIGHT_MIN_CM: i32 = 100;
pub const HEIGHT_MAX_CM: i32 = 220;

// Distribution shares ------------------------------------------------------
/// Shares are stored in tenths of a percent.
pub const SHARE_SCALE: u16 = 10;
pub const SHARE_TOTAL_PER_MILLE: u16 = 1_000;

// Locale -------------------------------------------------------------------
pub const DEFAULT_LANG: &str = "en";
pub(crate) const KEY_INSUFFICIENT_DATA: &str = "result.insufficient_data";
pub(crate) const KEY_SHARE: &str = "result.share";
pub(crate) const KEY_SEPARATOR: &str = "result.separator";
pub(crate) const KEY_CITATION: &str = "result.citation";
pub(crate) const KEY_HEIGHT: &str = "result.height";
pub(crate) const KEY_DISCLAIMER: &str = "disclaimer";
