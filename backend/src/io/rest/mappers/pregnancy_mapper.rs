use shared::{
    PregnancyOverviewResponse, PregnancyRecord as SharedPregnancyRecord, RegisterPregnancyRequest,
};

use crate::domain::commands::pregnancy::{PregnancyOverview, RegisterPregnancyCommand};
use crate::domain::dates::format_iso_date;
use crate::domain::models::PregnancyRecord as DomainPregnancyRecord;

pub struct PregnancyMapper;

impl PregnancyMapper {
    pub fn to_dto(domain: DomainPregnancyRecord) -> SharedPregnancyRecord {
        SharedPregnancyRecord {
            last_period_date: format_iso_date(domain.last_period_date),
            due_date: format_iso_date(domain.due_date),
        }
    }

    pub fn to_register_command(request: RegisterPregnancyRequest) -> RegisterPregnancyCommand {
        RegisterPregnancyCommand {
            last_period_date: request.last_period_date,
        }
    }

    pub fn to_overview_dto(domain: PregnancyOverview) -> PregnancyOverviewResponse {
        let progress = domain.progress;
        PregnancyOverviewResponse {
            pregnancy: Self::to_dto(domain.pregnancy),
            today: format_iso_date(domain.today),
            current_week: progress.current_week,
            trimester: progress.trimester,
            progress_percent: progress.progress_percent,
            days_until_due: progress.days_until_due,
            due_countdown: progress.due_countdown,
            week_info: progress.week_info.clone(),
            warning_signs: domain.warning_signs.iter().map(|s| s.to_string()).collect(),
        }
    }
}
