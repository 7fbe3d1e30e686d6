use chrono::{DateTime, Utc};
use plandag::request::model::{ScheduleRequest, ScheduleTask};

/// Builder for `ScheduleTask` to simplify test setup.
///
/// Defaults: one estimated hour, no due date, no dependencies.
pub struct ScheduleTaskBuilder {
    task: ScheduleTask,
}

impl ScheduleTaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: ScheduleTask {
                title: title.to_string(),
                estimated_hours: 1,
                due_date: None,
                dependencies: Vec::new(),
            },
        }
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn due(mut self, due: DateTime<Utc>) -> Self {
        self.task.due_date = Some(due);
        self
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> ScheduleTask {
        self.task
    }
}

/// Builder for `ScheduleRequest`. Tasks keep the order they are added in.
pub struct ScheduleRequestBuilder {
    tasks: Vec<ScheduleTask>,
}

impl ScheduleRequestBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: ScheduleTask) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> ScheduleRequest {
        ScheduleRequest { tasks: self.tasks }
    }
}

impl Default for ScheduleRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
