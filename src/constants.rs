pub const WINDOW_WIDTH: i32 = 480;            // Default window width
pub const WINDOW_HEIGHT: i32 = 860;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const SWIPE_THRESHOLD: f32 = 120.0;       // Release distance that commits a swipe (px)
pub const VELOCITY_THRESHOLD: f32 = 600.0;    // Release speed that commits a swipe (px/s)

pub const DRAG_LIMIT: f32 = 400.0;            // Drag constraint on either side (px)
pub const DRAG_ELASTIC: f32 = 0.3;            // Share of movement kept past the constraint
pub const DRAG_SCALE: f32 = 1.02;             // Active card scale while grabbed

pub const ROTATION_RANGE: (f32, f32) = (-240.0, 240.0); // Offset range mapped to rotation (px)
pub const ROTATION_DEGREES: (f32, f32) = (-12.0, 12.0);  // Rotation at the ends of that range
pub const LIKE_RANGE: (f32, f32) = (40.0, 160.0);        // Offset over which LIKE fades in (px)
pub const NOPE_RANGE: (f32, f32) = (-160.0, -40.0);      // Offset over which NOPE fades in (px)

pub const SPRING_STIFFNESS: f32 = 300.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MASS: f32 = 1.0;

pub const EXIT_DISTANCE_FACTOR: f32 = 1.2;    // Exit target as a multiple of the viewport width
pub const EXIT_FADE_DURATION: f32 = 0.2;      // Fade and shrink of the leaving card (seconds)
pub const EXIT_SCALE: f32 = 0.8;              // Scale reached by the leaving card
pub const EXIT_DELAY_MS: u64 = 150;           // Fixed delay used by the timer exit mode

pub const TAP_SLOP: f32 = 8.0;                // Max movement for a press to count as a tap (px)
pub const TAP_MAX_DURATION: f64 = 0.3;        // Max press length for a tap (seconds)

pub const VELOCITY_WINDOW: f64 = 0.1;         // Pointer history used for release velocity (seconds)

pub const CONTAINER_MAX_WIDTH: f32 = 448.0;   // Home page column width
pub const CARD_HEIGHT: f32 = 600.0;           // Default card height
pub const HEADER_HEIGHT: f32 = 64.0;          // Page title block
pub const BUTTON_SIZE: f32 = 48.0;            // Round deck buttons
pub const BUTTON_GAP: f32 = 16.0;
pub const BUTTON_ROW_OFFSET: f32 = 16.0;      // Space between card bottom and button row
pub const NAV_HEIGHT: f32 = 72.0;             // Bottom navigation bar
pub const PAGE_PADDING: f32 = 16.0;
pub const WHEEL_STEP: f32 = 40.0;             // Page scroll per wheel notch (px)
