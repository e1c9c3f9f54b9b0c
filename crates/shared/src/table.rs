//! View model for the plans table
//!
//! Everything the table shows is derived here from the fetched plans so the
//! component only has to lay the cells out. Nothing in this module reorders or
//! mutates the fetched list; sorting works on a list of references.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Plan;

/// Rows per page. Also the only page size offered
pub const PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: [usize; 1] = [PAGE_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Tier,
    Price,
    MonthQuota,
    WeekQuota,
    Features,
    Edit,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Tier,
        Column::Price,
        Column::MonthQuota,
        Column::WeekQuota,
        Column::Features,
        Column::Edit,
    ];

    pub const fn header(self) -> &'static str {
        use Column::*;
        match self {
            Tier => "Tier",
            Price => "Price (¢)",
            MonthQuota => "MonthQuota",
            WeekQuota => "WeekQuota",
            Features => "Features",
            Edit => "Edit",
        }
    }

    /// Column width in pixels
    pub const fn width(self) -> u32 {
        use Column::*;
        match self {
            Tier => 120,
            Price => 110,
            MonthQuota => 120,
            WeekQuota => 120,
            Features => 200,
            Edit => 100,
        }
    }

    pub const fn sortable(self) -> bool {
        !matches!(self, Column::Edit)
    }

    fn compare(self, a: &Plan, b: &Plan) -> Ordering {
        use Column::*;
        match self {
            Tier => a.id.cmp(&b.id),
            Price => a.price_cents.cmp(&b.price_cents),
            MonthQuota => a.quota_month.cmp(&b.quota_month),
            WeekQuota => a.quota_week.cmp(&b.quota_week),
            Features => a.features.cmp(&b.features),
            Edit => Ordering::Equal,
        }
    }
}

/// How a quota cell is shown when the plan has no quota of that kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaDisplay {
    #[default]
    Blank,
    Zero,
    Unlimited,
}

impl QuotaDisplay {
    pub fn render(self, quota: Option<u64>) -> String {
        match (quota, self) {
            (Some(quota), _) => quota.to_string(),
            (None, QuotaDisplay::Blank) => String::new(),
            (None, QuotaDisplay::Zero) => "0".to_owned(),
            (None, QuotaDisplay::Unlimited) => "Unlimited".to_owned(),
        }
    }
}

impl Display for QuotaDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::Zero => write!(f, "zero"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown quota display {0:?}, expected one of: blank, zero, unlimited")]
pub struct UnknownQuotaDisplay(pub String);

impl FromStr for QuotaDisplay {
    type Err = UnknownQuotaDisplay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blank" => Ok(Self::Blank),
            "zero" => Ok(Self::Zero),
            "unlimited" => Ok(Self::Unlimited),
            _ => Err(UnknownQuotaDisplay(s.to_owned())),
        }
    }
}

/// Display strings for one plan, one per data column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub id: String,
    pub tier: String,
    pub price: String,
    pub month_quota: String,
    pub week_quota: String,
    pub features: String,
}

impl PlanRow {
    pub fn new(plan: &Plan, quota_display: QuotaDisplay) -> Self {
        Self {
            id: plan.id.clone(),
            tier: plan.id.clone(),
            price: plan.price_cents.to_string(),
            month_quota: quota_display.render(plan.quota_month),
            week_quota: quota_display.render(plan.quota_week),
            features: plan.features_label(),
        }
    }

    /// What to draw in `column`. The edit cell is a control that is never
    /// enabled, there is no edit path
    pub fn cell(&self, column: Column) -> Cell<'_> {
        use Column::*;
        match column {
            Tier => Cell::Text(&self.tier),
            Price => Cell::Text(&self.price),
            MonthQuota => Cell::Text(&self.month_quota),
            WeekQuota => Cell::Text(&self.week_quota),
            Features => Cell::Text(&self.features),
            Edit => Cell::Control { label: Column::Edit.header(), enabled: false },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Text(&'a str),
    Control { label: &'a str, enabled: bool },
}

impl Cell<'_> {
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Control { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Sort state after the header of `column` is clicked
    ///
    /// A new column starts ascending, the current column flips direction.
    /// Returns `current` untouched for unsortable columns
    pub fn toggle(current: Option<SortOrder>, column: Column) -> Option<SortOrder> {
        if !column.sortable() {
            return current;
        }

        match current {
            Some(SortOrder { column: c, direction: SortDirection::Ascending }) if c == column => {
                Some(SortOrder { column, direction: SortDirection::Descending })
            }
            _ => Some(SortOrder { column, direction: SortDirection::Ascending }),
        }
    }

    fn compare(self, a: &Plan, b: &Plan) -> Ordering {
        let ordering = self.column.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Number of pages needed for `total` rows. An empty table still has one page
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Everything needed to draw one page of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<PlanRow>,
    /// Zero based, clamped to the available pages
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub sort: Option<SortOrder>,
}

impl TableView {
    pub fn new(
        plans: &[Plan],
        sort: Option<SortOrder>,
        page: usize,
        quota_display: QuotaDisplay,
    ) -> Self {
        let total = plans.len();
        let page_count = page_count(total);
        let page = page.min(page_count - 1);

        let mut ordered: Vec<&Plan> = plans.iter().collect();
        if let Some(sort) = sort {
            // Stable, so ties keep store order
            ordered.sort_by(|a, b| sort.compare(a, b));
        }

        let rows = ordered
            .into_iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|plan| PlanRow::new(plan, quota_display))
            .collect();

        Self { rows, page, page_count, total, sort }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// State of the controls under the table
    pub fn pager(&self) -> Pager {
        Pager {
            page_size_options: &PAGE_SIZE_OPTIONS,
            page_size: PAGE_SIZE,
            previous_enabled: self.has_previous(),
            next_enabled: self.has_next(),
            range_label: self.range_label(),
        }
    }

    /// "1–5 of 12" style summary, "0–0 of 0" when empty
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0–0 of 0".to_owned();
        }
        let first = self.page * PAGE_SIZE + 1;
        let last = first + self.rows.len() - 1;
        format!("{first}–{last} of {}", self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page_size_options: &'static [usize],
    /// Selected option, always `PAGE_SIZE`
    pub page_size: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub range_label: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::PlanFields;

    fn plan(id: &str, price_cents: u64, features: &[&str]) -> Plan {
        Plan::new(
            id,
            PlanFields {
                price_cents,
                quota_month: None,
                quota_week: None,
                features: features.iter().map(|f| f.to_string()).collect(),
                stripe_price_id: None,
            },
        )
    }

    fn many(n: usize) -> Vec<Plan> {
        (0..n).map(|i| plan(&format!("tier{i:02}"), (n - i) as u64 * 100, &["x"])).collect()
    }

    #[test]
    fn test_column_schema() {
        let headers: Vec<_> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            ["Tier", "Price (¢)", "MonthQuota", "WeekQuota", "Features", "Edit"]
        );
        assert!(!Column::Edit.sortable());
        assert!(Column::ALL[..5].iter().all(|c| c.sortable()));
    }

    #[test]
    fn test_empty_result() {
        let view = TableView::new(&[], None, 0, QuotaDisplay::Blank);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 1);
        assert_eq!(view.range_label(), "0–0 of 0");
        assert!(!view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_single_free_plan() {
        let view = TableView::new(&[plan("free", 0, &["basic"])], None, 0, QuotaDisplay::Blank);
        assert_eq!(view.rows.len(), 1);

        let row = &view.rows[0];
        let cells: Vec<_> = Column::ALL.iter().map(|c| row.cell(*c).text().to_owned()).collect();
        assert_eq!(cells, ["free", "0", "", "", "basic", "Edit"]);
    }

    #[test]
    fn test_features_joined_in_order() {
        let row = PlanRow::new(&plan("p", 1, &["a", "b", "c"]), QuotaDisplay::Blank);
        assert_eq!(row.features, "a, b, c");

        let row = PlanRow::new(&plan("p", 1, &["c", "a"]), QuotaDisplay::Blank);
        assert_eq!(row.features, "c, a");

        let row = PlanRow::new(&plan("p", 1, &[]), QuotaDisplay::Blank);
        assert_eq!(row.features, "");
    }

    #[test]
    fn test_quota_display() {
        let mut p = plan("p", 1, &["a"]);
        p.quota_month = Some(100);

        for (display, missing) in [
            (QuotaDisplay::Blank, ""),
            (QuotaDisplay::Zero, "0"),
            (QuotaDisplay::Unlimited, "Unlimited"),
        ] {
            let row = PlanRow::new(&p, display);
            assert_eq!(row.month_quota, "100");
            assert_eq!(row.week_quota, missing);
        }

        assert_eq!("UNLIMITED".parse::<QuotaDisplay>().unwrap(), QuotaDisplay::Unlimited);
        assert!("infinite".parse::<QuotaDisplay>().is_err());
        assert_eq!(QuotaDisplay::default(), QuotaDisplay::Blank);
    }

    #[test]
    fn test_first_page_has_page_size_rows() {
        let plans = many(12);
        let view = TableView::new(&plans, None, 0, QuotaDisplay::Blank);

        assert_eq!(PAGE_SIZE_OPTIONS, [5]);
        assert_eq!(view.rows.len(), PAGE_SIZE);
        assert_eq!(view.total, 12);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.range_label(), "1–5 of 12");
        assert!(view.has_next());
    }

    #[test]
    fn test_edit_disabled_on_every_row() {
        let plans = many(12);
        for page in 0..page_count(plans.len()) {
            let view = TableView::new(&plans, None, page, QuotaDisplay::Blank);
            for row in &view.rows {
                assert_eq!(
                    row.cell(Column::Edit),
                    Cell::Control { label: "Edit", enabled: false },
                    "{}",
                    row.id
                );
                assert!(Column::ALL[..5].iter().all(|c| matches!(row.cell(*c), Cell::Text(_))));
            }
        }
    }

    #[test]
    fn test_pager_controls() {
        let plans = many(12);

        let first = TableView::new(&plans, None, 0, QuotaDisplay::Blank).pager();
        assert_eq!(first.page_size_options, [5]);
        assert_eq!(first.page_size, 5);
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.range_label, "1–5 of 12");

        let middle = TableView::new(&plans, None, 1, QuotaDisplay::Blank).pager();
        assert!(middle.previous_enabled);
        assert!(middle.next_enabled);
        assert_eq!(middle.range_label, "6–10 of 12");

        let empty = TableView::new(&[], None, 0, QuotaDisplay::Blank).pager();
        assert!(!empty.previous_enabled);
        assert!(!empty.next_enabled);
        assert_eq!(empty.page_size_options, [5]);
    }

    #[test]
    fn test_last_page_and_clamping() {
        let plans = many(12);

        let last = TableView::new(&plans, None, 2, QuotaDisplay::Blank);
        assert_eq!(last.rows.len(), 2);
        assert_eq!(last.range_label(), "11–12 of 12");
        assert!(!last.has_next());
        assert!(last.has_previous());

        let clamped = TableView::new(&plans, None, 99, QuotaDisplay::Blank);
        assert_eq!(clamped, last);
    }

    #[test]
    fn test_rows_cover_every_plan_in_store_order() {
        let plans = many(7);
        let ids: Vec<_> = (0..page_count(plans.len()))
            .flat_map(|page| TableView::new(&plans, None, page, QuotaDisplay::Blank).rows)
            .map(|row| row.id)
            .collect();
        let expected: Vec<_> = plans.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let plans = many(6);
        let before = plans.clone();

        let sort = Some(SortOrder { column: Column::Price, direction: SortDirection::Ascending });
        let first = TableView::new(&plans, sort, 0, QuotaDisplay::Blank);
        let again = TableView::new(&plans, sort, 0, QuotaDisplay::Blank);

        assert_eq!(plans, before);
        assert_eq!(first, again);
        // Prices descend with the index so ascending price puts the last tier first
        assert_eq!(first.rows[0].id, "tier05");
    }

    #[test]
    fn test_sort_descending_and_optional_columns() {
        let mut plans = vec![plan("a", 1, &["x"]), plan("b", 2, &["x"]), plan("c", 3, &["x"])];
        plans[0].quota_week = Some(10);
        plans[2].quota_week = Some(5);

        let by_week = TableView::new(
            &plans,
            Some(SortOrder { column: Column::WeekQuota, direction: SortDirection::Ascending }),
            0,
            QuotaDisplay::Blank,
        );
        let ids: Vec<_> = by_week.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);

        let by_tier_desc = TableView::new(
            &plans,
            Some(SortOrder { column: Column::Tier, direction: SortDirection::Descending }),
            0,
            QuotaDisplay::Blank,
        );
        let ids: Vec<_> = by_tier_desc.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_toggle() {
        let asc = SortOrder::toggle(None, Column::Tier);
        assert_eq!(asc, Some(SortOrder { column: Column::Tier, direction: SortDirection::Ascending }));

        let desc = SortOrder::toggle(asc, Column::Tier);
        assert_eq!(desc, Some(SortOrder { column: Column::Tier, direction: SortDirection::Descending }));

        let other = SortOrder::toggle(desc, Column::Price);
        assert_eq!(other, Some(SortOrder { column: Column::Price, direction: SortDirection::Ascending }));

        assert_eq!(SortOrder::toggle(other, Column::Edit), other);
        assert_eq!(SortOrder::toggle(None, Column::Edit), None);
    }
}
