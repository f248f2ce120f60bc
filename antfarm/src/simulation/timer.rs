// Count-up timer driving the periodic processes on the virtual clock.
// Counts up from 0 to max_value

/// Virtual time in milliseconds.
pub type SimTime = u64;

#[derive(Debug, Clone)]
pub struct Timer {
    pub max_value: SimTime,
    pub value: SimTime,
}

impl Timer {
    /// Create a new timer with a max value and an initial value
    pub fn new(max_value: SimTime, initial_value: SimTime) -> Self {
        Self {
            max_value,
            value: initial_value,
        }
    }

    /// Returns true if the timer has reached the max value
    pub fn is_ready(&self) -> bool {
        self.value >= self.max_value
    }

    /// Update the timer by dt (delta time)
    pub fn update(&mut self, dt: SimTime) {
        self.value += dt;
    }

    /// Consumes one period, keeping any overshoot.
    pub fn wrap(&mut self) {
        self.value = self.value.saturating_sub(self.max_value);
    }

    /// Restart from zero with a new period.
    pub fn rearm(&mut self, max_value: SimTime) {
        self.max_value = max_value;
        self.value = 0;
    }
}
