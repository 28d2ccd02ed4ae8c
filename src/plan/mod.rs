mod floors;
mod normalize;
mod raw;
mod units;
mod validate;

pub use floors::{total_floors, upper_floors};
pub use normalize::{Basement, BasementUse, NormalizedPlan, SetbackDistances, normalize};
pub use raw::{RawFlag, RawNumber, RawPlanForm, count_or_zero, flag_is_true, float_or_zero};
pub use units::{SQFT_TO_SQM, plot_area_sqm, round2};
pub use validate::{ValidationIssue, height_matches_floors, plot_area_plausible, validate_plan};
