//! Centralized style constants for the chat widget

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";

// Text colors with dark mode support
pub const SECONDARY_TEXT: &str = "text-gray-700 dark:text-gray-300";
pub const TERTIARY_TEXT: &str = "text-gray-600 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Message bubbles
pub const USER_BUBBLE_COLORS: &str =
    "bg-blue-100 dark:bg-blue-900 ml-10 md:ml-20 border border-blue-200 dark:border-blue-800";
pub const BOT_BUBBLE_COLORS: &str =
    "bg-white dark:bg-gray-700 mr-10 md:mr-20 border border-gray-200 dark:border-gray-600";
pub const BUBBLE_BASE: &str = "px-4 py-3 rounded-lg whitespace-pre-wrap break-words";

// Confidence badges, keyed by lowercased label
pub const BADGE_BASE: &str = "inline-block px-2 py-0.5 rounded-full text-xs font-medium";
pub const BADGE_HIGH: &str = "bg-green-50 dark:bg-green-900 text-green-800 dark:text-green-200";
pub const BADGE_MEDIUM: &str =
    "bg-orange-50 dark:bg-orange-900 text-orange-800 dark:text-orange-200";
pub const BADGE_LOW: &str = "bg-red-50 dark:bg-red-900 text-red-700 dark:text-red-300";
pub const BADGE_NEUTRAL: &str = "bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300";

// Follow-up chips
pub const CHIP: &str = "px-3 py-1 text-sm rounded-full border border-blue-200 dark:border-blue-800 text-blue-700 dark:text-blue-300 hover:bg-blue-50 dark:hover:bg-blue-900 transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

// Button styles
pub const PRIMARY_BUTTON: &str = "px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition-colors disabled:bg-gray-300 dark:disabled:bg-gray-600 disabled:cursor-not-allowed";
pub const LINK_BUTTON: &str = "text-xs text-blue-600 dark:text-blue-400 hover:underline";

// Input styles
pub const INPUT_BASE: &str = "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_2: &str = "flex flex-col gap-2";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER_GAP_2: &str = "flex items-center gap-2";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";
pub const HEADER_PADDING: &str = "px-4 py-3";

pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}

/// Colors for a confidence badge of the given category
pub fn confidence_colors(category: &str) -> &'static str {
    match category {
        "high" => BADGE_HIGH,
        "medium" => BADGE_MEDIUM,
        "low" => BADGE_LOW,
        _ => BADGE_NEUTRAL,
    }
}
