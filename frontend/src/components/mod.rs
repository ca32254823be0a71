pub mod charging_window_panel;
pub mod dashboard_view;
pub mod energy_pie_chart;

pub use charging_window_panel::ChargingWindowPanel;
pub use dashboard_view::DashboardView;
pub use energy_pie_chart::EnergyPieChart;
