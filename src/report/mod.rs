pub mod format_report;
