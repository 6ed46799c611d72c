use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgencyStats {
    pub active_clients: u32,
    pub active_caregivers: u32,
    pub visits_today: u32,
    pub open_shifts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: u64,
    pub title: String,
    pub due: Option<NaiveDate>,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitItem {
    pub id: u64,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub client: String,
    pub caregiver: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyHours {
    pub day: NaiveDate,
    pub hours: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub at: NaiveDateTime,
    pub summary: String,
    pub route: Option<String>,
}

/// Data handed to widgets for one frame. Populated by whatever talks to the
/// agency API; widgets only read it.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub stats: AgencyStats,
    pub tasks: Arc<Vec<TaskItem>>,
    pub visits: Arc<Vec<VisitItem>>,
    pub weekly_hours: Arc<Vec<DailyHours>>,
    pub activity: Arc<Vec<ActivityItem>>,
}

impl DashboardData {
    pub fn with_tasks(mut self, tasks: Vec<TaskItem>) -> Self {
        self.tasks = Arc::new(tasks);
        self
    }

    pub fn with_visits(mut self, visits: Vec<VisitItem>) -> Self {
        self.visits = Arc::new(visits);
        self
    }

    pub fn with_weekly_hours(mut self, hours: Vec<DailyHours>) -> Self {
        self.weekly_hours = Arc::new(hours);
        self
    }

    pub fn with_activity(mut self, activity: Vec<ActivityItem>) -> Self {
        self.activity = Arc::new(activity);
        self
    }

    /// Small fixed data set for the demo binary and UI smoke tests.
    pub fn sample(today: NaiveDate) -> Self {
        let at = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        let tasks = vec![
            TaskItem {
                id: 1,
                title: "Call Mrs. Alvarez about Thursday coverage".into(),
                due: Some(today),
                done: false,
            },
            TaskItem {
                id: 2,
                title: "Renew CPR certificate for J. Okafor".into(),
                due: today.succ_opt(),
                done: false,
            },
            TaskItem {
                id: 3,
                title: "Upload signed care plan".into(),
                due: None,
                done: true,
            },
        ];
        let visits = vec![
            VisitItem {
                id: 11,
                start: at(13, 0),
                end: at(15, 0),
                client: "R. Chen".into(),
                caregiver: None,
            },
            VisitItem {
                id: 10,
                start: at(8, 30),
                end: at(11, 30),
                client: "M. Alvarez".into(),
                caregiver: Some("J. Okafor".into()),
            },
        ];
        let weekly_hours = (0..7)
            .rev()
            .filter_map(|back| {
                let day = today.checked_sub_days(chrono::Days::new(back))?;
                Some(DailyHours {
                    day,
                    hours: 40.0 + (back as f32 * 6.5) % 23.0,
                })
            })
            .collect();
        let activity = vec![ActivityItem {
            at: today.and_time(at(9, 15)),
            summary: "New client intake: R. Chen".into(),
            route: Some("/clients/204".into()),
        }];
        Self {
            stats: AgencyStats {
                active_clients: 48,
                active_caregivers: 31,
                visits_today: 2,
                open_shifts: 1,
            },
            ..Self::default()
        }
        .with_tasks(tasks)
        .with_visits(visits)
        .with_weekly_hours(weekly_hours)
        .with_activity(activity)
    }
}
