use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{GoalPeriod, GoalType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub goal_type: GoalType,
    pub period: GoalPeriod,
    pub target: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct GoalQuery {
    pub period: Option<GoalPeriod>,
    pub goal_type: Option<GoalType>,
}
