//! Property-based tests for mutex_logger using proptest

use mutex_logger::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn single_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::EXCEPTION),
        Just(LogLevel::ERROR),
        Just(LogLevel::WARNING),
        Just(LogLevel::INFO),
        Just(LogLevel::CUSTOM),
        Just(LogLevel::DEBUG),
        Just(LogLevel::ALL),
    ]
}

fn any_mask() -> impl Strategy<Value = LogLevel> {
    (0u8..128).prop_map(LogLevel::from_bits)
}

fn console_logger(active: ActiveLevels) -> (Logger, MemoryConsole) {
    let console = MemoryConsole::new();
    let logger = Logger::builder()
        .active_levels(active)
        .console(Arc::new(console.clone()))
        .build();
    (logger, console)
}

// ============================================================================
// Filtering
// ============================================================================

proptest! {
    /// A level outside the active mask never produces output
    #[test]
    fn test_filtered_levels_write_nothing(bits in 0u8..128, mask in any_mask(), text in "[a-z ]{0,20}") {
        let level = LogLevel::from_bits(bits & !mask.bits());
        let (logger, console) = console_logger(ActiveLevels::raw(mask));

        logger.log_level(&text, level);

        prop_assert!(console.is_empty());
        prop_assert_eq!(logger.metrics().filtered_count(), 1);
    }

    /// NONE is discarded whatever the mask
    #[test]
    fn test_none_is_always_filtered(mask in any_mask()) {
        let (logger, console) = console_logger(ActiveLevels::raw(mask));
        logger.log_level("x", LogLevel::NONE);
        prop_assert!(console.is_empty());
    }

    /// Admitted single levels produce exactly one console line ending in the text
    #[test]
    fn test_admitted_level_writes_one_line(level in single_level(), text in "[a-z]{1,20}") {
        prop_assume!(level != LogLevel::EXCEPTION);
        let (logger, console) = console_logger(ActiveLevels::raw(level));
        logger.set_default_level(LogLevel::INFO);

        logger.log_level(&text, level);

        let lines = console.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(lines[0].ends_with(&text));
    }
}

// ============================================================================
// Activation policy
// ============================================================================

proptest! {
    /// Anything carrying ALL expands to the preset, plus DEBUG when asked
    #[test]
    fn test_activate_with_all(extra in any_mask()) {
        let requested = extra | LogLevel::ALL;
        let active = ActiveLevels::activate(requested);

        prop_assert!(active.mask().contains(LogLevel::ALL_PRESET));
        prop_assert!(!active.mask().contains(LogLevel::ALL));
        prop_assert_eq!(active.admits(LogLevel::DEBUG), requested.contains(LogLevel::DEBUG));
    }

    /// Anything without ALL is stored verbatim
    #[test]
    fn test_activate_without_all_is_verbatim(bits in 0u8..64) {
        let mask = LogLevel::from_bits(bits);
        prop_assert_eq!(ActiveLevels::activate(mask).mask(), mask);
    }
}

// ============================================================================
// Parsing and formatting
// ============================================================================

proptest! {
    /// Display output parses back to the same set
    #[test]
    fn test_level_display_parses_back(bits in any::<u8>()) {
        let mask = LogLevel::from_bits(bits);
        let parsed: LogLevel = mask.to_string().parse().unwrap();
        prop_assert_eq!(parsed, mask);
    }

    /// Level names parse case-insensitively
    #[test]
    fn test_level_parse_case_insensitive(level in single_level(), lower in any::<bool>()) {
        let name = level.to_string();
        let input = if lower { name.to_lowercase() } else { name };
        prop_assert_eq!(input.parse::<LogLevel>().unwrap(), level);
    }

    /// XHTML lines are always framed by <br> and <br/>
    #[test]
    fn test_xhtml_render_frames_text(prefix in ".{0,30}", text in ".{0,60}") {
        let line = LogFormat::Xhtml.render(&prefix, &text);
        prop_assert!(line.starts_with("<br>"));
        prop_assert!(line.ends_with("<br/>"));
        prop_assert_eq!(line.len(), prefix.len() + text.len() + "<br><br/>".len());
    }
}
