use shared::{
    CycleOverviewResponse, CycleRecord as SharedCycleRecord, FertileWindow as SharedFertileWindow,
    SaveCycleRequest,
};

use crate::domain::commands::cycle::{CycleOverview, SaveCycleCommand};
use crate::domain::dates::format_iso_date;
use crate::domain::models::CycleRecord as DomainCycleRecord;

pub struct CycleMapper;

impl CycleMapper {
    pub fn to_dto(domain: DomainCycleRecord) -> SharedCycleRecord {
        SharedCycleRecord {
            last_period_date: format_iso_date(domain.last_period_date),
            cycle_length: domain.cycle_length,
            period_length: domain.period_length,
        }
    }

    pub fn to_save_command(request: SaveCycleRequest) -> SaveCycleCommand {
        SaveCycleCommand {
            last_period_date: request.last_period_date,
            cycle_length: request.cycle_length,
            period_length: request.period_length,
        }
    }

    pub fn to_overview_dto(domain: CycleOverview) -> CycleOverviewResponse {
        let prediction = domain.prediction;
        CycleOverviewResponse {
            cycle: Self::to_dto(domain.cycle),
            today: format_iso_date(domain.today),
            day_in_cycle: prediction.day_in_cycle,
            current_phase: prediction.current_phase,
            current_phase_name: prediction.current_phase.display_name().to_string(),
            ovulation_date: format_iso_date(prediction.ovulation_date),
            ovulation_countdown: prediction.ovulation_countdown,
            fertile_window: SharedFertileWindow {
                start: format_iso_date(prediction.fertile_window.start),
                end: format_iso_date(prediction.fertile_window.end),
            },
            next_period_date: format_iso_date(prediction.next_period_date),
            next_period_countdown: prediction.next_period_countdown,
            fertility_tips: domain.fertility_tips,
        }
    }
}
