use std::fmt;

/// Summary of one completed workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Km.
    pub distance: f64,
    /// Km/h.
    pub speed: f64,
    /// Kcal.
    pub calories: f64,
}

impl Report {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Ave. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
