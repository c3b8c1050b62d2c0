//! Registration flow domain model
//!
//! The three registration stages are static configuration: their titles and
//! descriptions never change at runtime. Only the current step varies.

/// One stage of the fixed registration flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// 1-indexed position
    pub number: i32,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed registration stages
pub const REGISTRATION_STEPS: [StepInfo; 3] = [
    StepInfo {
        number: 1,
        title: "Account Data",
        description: "Personal information",
    },
    StepInfo {
        number: 2,
        title: "Company Data",
        description: "Business information",
    },
    StepInfo {
        number: 3,
        title: "Verification",
        description: "Terms and conditions",
    },
];

/// Total number of registration steps
pub const STEP_COUNT: i32 = REGISTRATION_STEPS.len() as i32;

/// Where a step sits relative to the step currently being worked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn of(number: i32, current_step: i32) -> Self {
        if number < current_step {
            StepStatus::Completed
        } else if number == current_step {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }
}

/// Fill fraction for the linear progress bar
///
/// Deliberately unclamped: a `current_step` past `total_steps` yields a
/// fraction above 1.0, and a zero or negative `current_step` yields a zero
/// or negative fraction.
pub fn progress_fraction(current_step: i32, total_steps: i32) -> f32 {
    current_step as f32 / total_steps as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(current_step: i32) -> Vec<StepStatus> {
        REGISTRATION_STEPS
            .iter()
            .map(|step| StepStatus::of(step.number, current_step))
            .collect()
    }

    #[test]
    fn first_step_active_rest_pending() {
        assert_eq!(
            statuses(1),
            vec![StepStatus::Active, StepStatus::Pending, StepStatus::Pending]
        );
        assert!((progress_fraction(1, STEP_COUNT) - 1.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn middle_step_splits_completed_and_pending() {
        assert_eq!(
            statuses(2),
            vec![StepStatus::Completed, StepStatus::Active, StepStatus::Pending]
        );
        // Connector styling follows the preceding step: 1→2 completed, 2→3 not.
        assert_eq!(StepStatus::of(1, 2), StepStatus::Completed);
        assert_ne!(StepStatus::of(2, 2), StepStatus::Completed);
        assert!((progress_fraction(2, STEP_COUNT) - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn last_step_completes_everything_before_it() {
        assert_eq!(
            statuses(3),
            vec![StepStatus::Completed, StepStatus::Completed, StepStatus::Active]
        );
        assert!((progress_fraction(3, STEP_COUNT) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fraction_is_unclamped_outside_the_step_range() {
        assert!(progress_fraction(4, STEP_COUNT) > 1.0);
        assert_eq!(progress_fraction(0, STEP_COUNT), 0.0);
        assert!(progress_fraction(-1, STEP_COUNT) < 0.0);
    }
}
