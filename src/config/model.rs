use serde::{Deserialize, Serialize};

/// Bye-law compliance configuration.
///
/// Every table is optional in the TOML file; omitted values fall back to
/// the BBMP R1-zone defaults baked in below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Minimum required setback distances [setbacks].
    #[serde(default)]
    pub setbacks: RequiredSetbacks,

    /// Threshold limits for the non-setback rules [limits].
    #[serde(default)]
    pub limits: RuleLimits,

    /// Redevelopment scoring weightage [scoring].
    #[serde(default)]
    pub scoring: Weightage,

    /// Plan-file discovery settings [plans].
    #[serde(default)]
    pub plans: PlanFileConfig,
}

/// Minimum mandated clear distance between building edge and plot
/// boundary, per side, in meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RequiredSetbacks {
    #[serde(default = "default_front_setback")]
    pub front: f64,

    #[serde(default = "default_rear_setback")]
    pub rear: f64,

    #[serde(default = "default_side_setback")]
    pub side1: f64,

    #[serde(default = "default_side_setback")]
    pub side2: f64,
}

impl Default for RequiredSetbacks {
    fn default() -> Self {
        Self {
            front: default_front_setback(),
            rear: default_rear_setback(),
            side1: default_side_setback(),
            side2: default_side_setback(),
        }
    }
}

/// Thresholds for the height, area and parking rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RuleLimits {
    /// Maximum permissible building height, meters.
    #[serde(default = "default_max_height")]
    pub max_building_height: f64,

    /// Height above which structural-stability verification is advised,
    /// meters. Strictly-greater-than comparison.
    #[serde(default = "default_structural_review_height")]
    pub structural_review_height: f64,

    /// Minimum plot area that meets requirements, square meters.
    #[serde(default = "default_min_plot_area")]
    pub min_plot_area: f64,

    /// Plot area below which space-utilization advice fires, square meters.
    #[serde(default = "default_small_plot_area")]
    pub small_plot_area: f64,

    /// Minimum car parking spaces considered adequate.
    #[serde(default = "default_min_car_parking")]
    pub min_car_parking: u32,

    /// Upper-floor count at which fire-safety advice for multi-storey
    /// buildings fires.
    #[serde(default = "default_multi_storey_floors")]
    pub multi_storey_upper_floors: u32,
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_building_height: default_max_height(),
            structural_review_height: default_structural_review_height(),
            min_plot_area: default_min_plot_area(),
            small_plot_area: default_small_plot_area(),
            min_car_parking: default_min_car_parking(),
            multi_storey_upper_floors: default_multi_storey_floors(),
        }
    }
}

/// Redevelopment prioritization weightage, in percent. The six factors
/// are weighed against each other; they conventionally sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weightage {
    #[serde(default = "default_weight_20")]
    pub water_access: f64,

    #[serde(default = "default_weight_20")]
    pub toilet_access: f64,

    #[serde(default = "default_weight_15")]
    pub drainage: f64,

    #[serde(default = "default_weight_15")]
    pub road_infrastructure: f64,

    #[serde(default = "default_weight_15")]
    pub electricity: f64,

    #[serde(default = "default_weight_15")]
    pub population_density: f64,
}

impl Default for Weightage {
    fn default() -> Self {
        Self {
            water_access: default_weight_20(),
            toilet_access: default_weight_20(),
            drainage: default_weight_15(),
            road_infrastructure: default_weight_15(),
            electricity: default_weight_15(),
            population_density: default_weight_15(),
        }
    }
}

/// Plan-file discovery settings for directory scans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanFileConfig {
    /// File extensions treated as plan submissions.
    #[serde(default = "default_plan_extensions")]
    pub extensions: Vec<String>,

    /// Exclude patterns (glob syntax).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for PlanFileConfig {
    fn default() -> Self {
        Self {
            extensions: default_plan_extensions(),
            exclude: Vec::new(),
        }
    }
}

fn default_front_setback() -> f64 {
    3.0
}

fn default_rear_setback() -> f64 {
    2.0
}

fn default_side_setback() -> f64 {
    1.5
}

fn default_max_height() -> f64 {
    15.0
}

fn default_structural_review_height() -> f64 {
    12.0
}

fn default_min_plot_area() -> f64 {
    100.0
}

fn default_small_plot_area() -> f64 {
    200.0
}

const fn default_min_car_parking() -> u32 {
    1
}

const fn default_multi_storey_floors() -> u32 {
    2
}

fn default_weight_20() -> f64 {
    20.0
}

fn default_weight_15() -> f64 {
    15.0
}

fn default_plan_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
