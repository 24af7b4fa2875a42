mod calendar;
mod dashboard;
mod donut_chart;

pub use calendar::DatePicker;
pub use dashboard::RevenueDashboard;
pub use donut_chart::DonutChart;
