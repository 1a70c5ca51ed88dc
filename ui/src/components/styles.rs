//! Tailwind class strings shared by forms and tables.

pub const INPUT: &str = "w-full px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md shadow-sm bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2 \
    focus:ring-neutral-500 focus:border-neutral-500 \
    dark:focus:ring-neutral-400 dark:focus:border-neutral-400 \
    disabled:opacity-50";

pub const LABEL: &str = "block text-sm font-medium text-neutral-700 \
    dark:text-neutral-300 mb-2";

pub const BUTTON_PRIMARY: &str = "px-4 py-2 border border-transparent \
    rounded-md shadow-sm text-sm font-medium text-white bg-neutral-900 \
    hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 \
    dark:hover:bg-neutral-200 focus:outline-none focus:ring-2 \
    focus:ring-offset-2 focus:ring-neutral-500 disabled:opacity-50 \
    disabled:cursor-not-allowed transition-colors duration-200";

pub const BUTTON_SECONDARY: &str = "px-4 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md text-sm font-medium text-neutral-700 \
    dark:text-neutral-300 bg-white dark:bg-neutral-700 \
    hover:bg-neutral-50 dark:hover:bg-neutral-600 disabled:opacity-50 \
    disabled:cursor-not-allowed transition-colors duration-200";

pub const BUTTON_DANGER: &str = "px-3 py-1 rounded-md text-sm font-medium \
    text-white bg-red-600 hover:bg-red-700 disabled:opacity-50 \
    transition-colors duration-200";

pub const LINK_BUTTON: &str = "text-sm font-medium text-neutral-900 \
    dark:text-neutral-100 underline hover:text-neutral-600 \
    dark:hover:text-neutral-300";

pub const TABLE: &str = "min-w-full divide-y divide-neutral-200 \
    dark:divide-neutral-700 text-sm";

pub const TH: &str = "px-3 py-2 text-left text-xs font-semibold uppercase \
    tracking-wider text-neutral-500 dark:text-neutral-400 \
    bg-neutral-50 dark:bg-neutral-800 whitespace-nowrap";

pub const TD: &str = "px-3 py-2 text-neutral-800 dark:text-neutral-200 \
    whitespace-nowrap";

pub const TR: &str = "border-b border-neutral-100 dark:border-neutral-700 \
    hover:bg-neutral-50 dark:hover:bg-neutral-800/50";

pub const CARD: &str = "bg-white dark:bg-neutral-800 rounded-lg shadow-sm \
    border border-neutral-200 dark:border-neutral-700 p-6";

pub const ERROR_BOX: &str = "p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
    border border-red-200 dark:border-red-800";

pub const MUTED: &str = "text-sm text-neutral-600 dark:text-neutral-400";
