// DOM-side constants for the web host.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Prefix for per-instance filter ids; a counter keeps them unique on the page
pub const FILTER_ID_PREFIX: &str = "rgb-split";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
