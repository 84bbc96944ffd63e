use strum::{EnumIter, IntoEnumIterator};

/// Report lines in display order.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, EnumIter)]
pub enum ReportItem {
    Mean,
    StdDev,
    Min,
    Median,
    Max,
}

pub fn report_item_name(item: &ReportItem) -> &str {
    match item {
        ReportItem::Mean => "Mean Execution Time",
        ReportItem::StdDev => "Standard Deviation",
        ReportItem::Min => "Minimum",
        ReportItem::Median => "Median",
        ReportItem::Max => "Maximum",
    }
}

fn report_item_name_max_width() -> usize {
    static WIDTH: once_cell::sync::OnceCell<usize> = once_cell::sync::OnceCell::new();
    *WIDTH.get_or_init(|| {
        let mut width = 0;
        for item in ReportItem::iter() {
            width = std::cmp::max(width, report_item_name(&item).len());
        }
        width
    })
}

pub fn report_item_value(item: &ReportItem, stats: &crate::stats::Stats) -> f64 {
    match item {
        ReportItem::Mean => stats.mean,
        ReportItem::StdDev => stats.stdev,
        ReportItem::Min => stats.min(),
        ReportItem::Median => stats.median(),
        ReportItem::Max => stats.max(),
    }
}

/// All report lines for one benchmark, values aligned to the widest item name.
pub fn render(stats: &crate::stats::Stats) -> Vec<String> {
    ReportItem::iter()
        .map(|item| {
            format!(
                "{:<width$} {:.6} seconds",
                format!("{}:", report_item_name(&item)),
                report_item_value(&item, stats),
                width = report_item_name_max_width() + 1
            )
        })
        .collect()
}
