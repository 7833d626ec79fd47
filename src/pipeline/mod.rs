pub mod run_daily_report;
