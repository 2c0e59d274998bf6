// --- DATASET SHAPE CONSTANTS ---
/// Number of ISO-like weeks covered by the dataset
pub const WEEK_COUNT: u32 = 8;
/// Days generated per week
pub const DAYS_PER_WEEK: u32 = 7;
/// First calendar day of the dataset (week 1, day 0)
pub const EPOCH: (i32, u32, u32) = (2026, 1, 1);

// --- GENERATION PARAMETER CONSTANTS ---
/// Base goal draw range before the market multiplier is applied
pub const GOAL_MIN: i64 = 800;
pub const GOAL_MAX: i64 = 1500;
/// Attainment ratio distribution: Normal(mean, std dev), clamped below
pub const ATTAINMENT_MEAN: f64 = 1.0;
pub const ATTAINMENT_STD_DEV: f64 = 0.15;
pub const ATTAINMENT_FLOOR: f64 = 0.5;
pub const ATTAINMENT_CEIL: f64 = 1.5;
/// Per-display sales lift drawn uniformly from this range
pub const DISPLAY_LIFT_MIN: f64 = 0.05;
pub const DISPLAY_LIFT_MAX: f64 = 0.10;
pub const MAX_DISPLAYS: u32 = 4;
pub const MAX_PODS: u32 = 3;
pub const MAX_VOIDS: u32 = 2;

// --- NAME TABLES ---
pub const ACCOUNTS: [&str; 5] = [
    "Tom Thumb",
    "Kroger",
    "Central Market",
    "Whole Foods",
    "Market Street",
];

pub const BRANDS: [&str; 5] = [
    "Moët & Chandon",
    "Hennessy",
    "Veuve Clicquot",
    "Dom Pérignon",
    "Belvedere",
];

pub const REPS: [&str; 5] = [
    "Martinez, J",
    "Thompson, K",
    "Williams, R",
    "Garcia, M",
    "Johnson, T",
];
