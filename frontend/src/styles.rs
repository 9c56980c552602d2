pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-4xl rounded-xl shadow-lg mt-16";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl rounded-xl shadow-lg mt-16";

pub const CARD: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 mx-auto mt-4";
pub const CARD_HOVER_SCALE: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 transform transition-transform duration-200 hover:scale-105";
pub const CARD_SECTION: &str = "bg-gray-800 border border-gray-700 p-3 rounded-lg shadow-sm";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_SUCCESS: &str = "bg-green-600 hover:bg-green-700 focus:ring-2 focus:ring-green-400 focus:outline-none";
pub const BUTTON_NEUTRAL: &str = "bg-gray-600 hover:bg-gray-700 focus:ring-2 focus:ring-gray-400 focus:outline-none";
pub const BUTTON_WARNING: &str = "bg-yellow-600 hover:bg-yellow-700 focus:ring-2 focus:ring-yellow-400 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";

pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 font-semibold";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub const NOTICE_CARD: &str = "p-4 rounded-lg border shadow-sm mb-2";
pub const NOTICE_SUCCESS: &str = "bg-green-900 border-green-700 text-green-200";
pub const NOTICE_INFO: &str = "bg-blue-900 border-blue-700 text-blue-200";
pub const NOTICE_WARNING: &str = "bg-yellow-900 border-yellow-700 text-yellow-200";

// Modal overlay sits above the fixed navigation bar.
pub const MODAL_OVERLAY: &str = "fixed inset-0 bg-black/70 flex items-center justify-center z-50 px-4";
pub const MODAL_CARD: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-xl p-6 w-full max-w-md text-white";

pub const BAR_TRACK: &str = "w-full bg-gray-700 rounded h-6 overflow-hidden";
pub const BAR_POSITIVE: &str = "bg-green-500 h-6 rounded transition-all duration-300";
pub const BAR_NEGATIVE: &str = "bg-red-500 h-6 rounded transition-all duration-300";
pub const BAR_NEUTRAL: &str = "bg-blue-500 h-6 rounded transition-all duration-300";

pub const STATUS_CHIP: &str = "inline-block px-2 py-0.5 rounded-full text-xs font-semibold";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(
            BUTTON_BASE,
            &combine_classes(BUTTON_PRIMARY, "w-full py-3 font-semibold mt-4"),
        )
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}

pub fn status_chip(label: &str) -> String {
    let color = match label {
        "Active" => "bg-green-700 text-green-100",
        "Paused" => "bg-yellow-700 text-yellow-100",
        "Closed" => "bg-orange-700 text-orange-100",
        "Archived" => "bg-gray-600 text-gray-200",
        _ => "bg-gray-700 text-gray-300",
    };
    combine_classes(STATUS_CHIP, color)
}
