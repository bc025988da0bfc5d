mod bench_report;
mod dashboard;

pub use bench_report::BenchReportPage;
pub use dashboard::AnalyticsDashboardPage;
