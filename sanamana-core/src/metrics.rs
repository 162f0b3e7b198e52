use crate::model::Profile;

/// Weight and waist change since the first log entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressStats {
    pub initial_weight: f64,
    pub current_weight: f64,
    pub goal_weight: f64,
    pub initial_waist: f64,
    pub current_waist: f64,
    pub weight_loss: f64,
    pub weight_loss_percent: f64,
    pub waist_loss: f64,
    pub waist_loss_percent: f64,
    /// Share of the initial-to-goal distance covered, at most 100.
    /// `None` when the goal equals the starting weight.
    pub goal_progress: Option<f64>,
}

impl Profile {
    /// Weight recorded in the first log entry, or the current weight when
    /// there are no logs.
    pub fn initial_weight(&self) -> f64 {
        self.logs().first().map_or(self.current_weight, |log| log.weight)
    }

    pub fn initial_waist(&self) -> f64 {
        self.logs().first().map_or(self.waist_measurement, |log| log.waist)
    }

    pub fn stats(&self) -> ProgressStats {
        let initial_weight = self.initial_weight();
        let initial_waist = self.initial_waist();
        let weight_loss = initial_weight - self.current_weight;
        let waist_loss = initial_waist - self.waist_measurement;

        ProgressStats {
            initial_weight,
            current_weight: self.current_weight,
            goal_weight: self.goal_weight,
            initial_waist,
            current_waist: self.waist_measurement,
            weight_loss,
            weight_loss_percent: percent_of(weight_loss, initial_weight),
            waist_loss,
            waist_loss_percent: percent_of(waist_loss, initial_waist),
            goal_progress: goal_progress(initial_weight, self.current_weight, self.goal_weight),
        }
    }
}

/// `min(100, loss / (initial - goal) * 100)`, or `None` if the goal distance is zero.
pub fn goal_progress(initial_weight: f64, current_weight: f64, goal_weight: f64) -> Option<f64> {
    let distance = initial_weight - goal_weight;
    if distance == 0.0 {
        return None;
    }
    let loss = initial_weight - current_weight;
    Some((loss / distance * 100.0).min(100.0))
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}
