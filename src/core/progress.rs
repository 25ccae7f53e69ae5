use std::fmt;

/// Per-image outcome reported to the progress log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
    Error,
}

/// Progress of a sequential batch, logged after every image
#[derive(Debug, Clone)]
pub struct Progress {
    pub progress_type: ProgressType,
    /// Number of images handled so far, successful or not
    pub completed_tasks: usize,
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
}

impl Progress {
    pub fn new(
        progress_type: ProgressType,
        completed_tasks: usize,
        total_tasks: usize,
        status: impl Into<String>,
    ) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status: status.into(),
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{} {:>3}%] {}",
            self.completed_tasks, self.total_tasks, self.progress_percentage, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(Progress::new(ProgressType::Progress, 1, 3, "a").progress_percentage, 33);
        assert_eq!(Progress::new(ProgressType::Complete, 3, 3, "a").progress_percentage, 100);
        assert_eq!(Progress::new(ProgressType::Start, 0, 0, "a").progress_percentage, 0);
    }

    #[test]
    fn test_display() {
        let progress = Progress::new(ProgressType::Error, 2, 4, "broken.jpg failed");
        assert_eq!(progress.to_string(), "[2/4  50%] broken.jpg failed");
    }
}
