use serde::Serialize;

/// Static definition of a billable item. Lives in the pricing catalog only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItemDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub minutes_per_unit: u32,
    pub base_amount: f64,
    pub bbi_amount: f64,
}

impl LineItemDefinition {
    /// Amount billed for a single unit, BBI included.
    pub fn unit_amount(&self) -> f64 {
        self.base_amount + self.bbi_amount
    }

    pub fn category(&self) -> Category {
        Category::of(self.key)
    }
}

/// Snapshot of a catalog item as billed on a given day
/// ⇔ one row of `day_line_items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLineItemRow {
    pub id: i64,
    pub day_id: i64,
    pub item_key: String,
    pub label: String,
    pub minutes_per_unit: i64,
    pub base_amount: f64,
    pub bbi_amount: f64,
    pub count: i64,
}

impl DayLineItemRow {
    pub fn subtotal(&self) -> f64 {
        self.count as f64 * (self.base_amount + self.bbi_amount)
    }

    pub fn minutes(&self) -> i64 {
        self.count * self.minutes_per_unit
    }

    pub fn category(&self) -> Category {
        Category::of(&self.item_key)
    }
}

/// Display grouping, derived from the item key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Consultations,
    Telehealth,
    Procedures,
    CarePlans,
    Other,
}

impl Category {
    pub fn of(key: &str) -> Self {
        if key.contains("consult_") {
            Category::Consultations
        } else if key.contains("telehealth_") || key.contains("phone_") {
            Category::Telehealth
        } else if key.contains("procedure_") {
            Category::Procedures
        } else if key.contains("care_plan_") || key.contains("assessment_") {
            Category::CarePlans
        } else {
            Category::Other
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Consultations => "Consultations",
            Category::Telehealth => "Telehealth",
            Category::Procedures => "Procedures",
            Category::CarePlans => "Care Plans & Assessments",
            Category::Other => "Other",
        }
    }
}
