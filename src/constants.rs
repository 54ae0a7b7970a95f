// Page wiring constants: element ids, CSS classes and timer periods.

// Canvases
pub const FIELD_CANVAS_ID: &str = "flux-canvas";
pub const LENS_CANVAS_ID: &str = "lens-canvas";

// Lens affordances
pub const SCANNER_RING_ID: &str = "scanner-ring";
pub const LENS_INSTRUCTIONS_ID: &str = "lens-instructions";

// Page elements
pub const LIVE_RATE_ID: &str = "live-rate";
pub const VIDEO_ID: &str = "preview-video";
pub const VIDEO_PLAY_BTN_ID: &str = "video-play-btn";
pub const VIDEO_PROGRESS_ID: &str = "video-progress-bar";
pub const VIDEO_CARD_ID: &str = "video-card";
pub const COURSE_DETAILS_ID: &str = "course-details";
pub const DEFAULT_COURSE: &str = "epp";

// Selectors
pub const NAV_SELECTOR: &str = "nav";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const STAT_SELECTOR: &str = ".stat-block h4";
pub const TICKER_ITEM_SELECTOR: &str = ".ticker-item";
pub const TICKER_CHANGE_SELECTOR: &str = ".up, .down";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTOR_NODE_SELECTOR: &str = ".sector-node";
pub const COURSE_TRACK_SELECTOR: &str = ".course-track";

// Classes
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_COUNTED: &str = "counted";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_PLAYING: &str = "playing";

// Timers (milliseconds)
pub const TICKER_ROTATE_MS: i32 = 2500;
pub const TICKER_FADE_MS: i32 = 300;
pub const JITTER_MS: i32 = 4000;
pub const COURSE_REVEAL_DELAY_MS: i32 = 100;

// Intersection thresholds
pub const FADE_IN_THRESHOLD: f64 = 0.15;
pub const STAT_THRESHOLD: f64 = 0.5;
pub const VIDEO_THRESHOLD: f64 = 0.5;
