use shared::{
    CreateGrowthRecordRequest, GrowthRecord as SharedGrowthRecord, GrowthRecordEntry,
    GrowthRecordListResponse, GrowthRecordResponse, MilestonesResponse,
};

use crate::domain::commands::growth::{AddGrowthRecordCommand, AnalyzedGrowthRecord, ChildMilestones};
use crate::domain::dates::format_iso_date;
use crate::domain::models::GrowthRecord as DomainGrowthRecord;

pub struct GrowthMapper;

impl GrowthMapper {
    pub fn to_dto(domain: DomainGrowthRecord) -> SharedGrowthRecord {
        SharedGrowthRecord {
            id: domain.id,
            child_id: domain.child_id,
            date: format_iso_date(domain.date),
            age_months: domain.age_months,
            weight: domain.weight,
            height: domain.height,
            head_circumference: domain.head_circumference,
        }
    }

    pub fn to_add_command(child_id: String, request: CreateGrowthRecordRequest) -> AddGrowthRecordCommand {
        AddGrowthRecordCommand {
            child_id,
            date: request.date,
            weight: request.weight,
            height: request.height,
            head_circumference: request.head_circumference,
        }
    }

    pub fn to_entry_dto(domain: AnalyzedGrowthRecord) -> GrowthRecordEntry {
        GrowthRecordEntry {
            record: Self::to_dto(domain.record),
            analysis: domain.analysis,
        }
    }

    pub fn to_list_dto(child_id: String, domain: Vec<AnalyzedGrowthRecord>) -> GrowthRecordListResponse {
        GrowthRecordListResponse {
            child_id,
            records: domain.into_iter().map(Self::to_entry_dto).collect(),
        }
    }

    pub fn to_record_response_dto(domain: AnalyzedGrowthRecord) -> GrowthRecordResponse {
        GrowthRecordResponse {
            entry: Self::to_entry_dto(domain),
            success_message: "Medição salva com sucesso".to_string(),
        }
    }

    pub fn to_milestones_dto(domain: ChildMilestones) -> MilestonesResponse {
        MilestonesResponse {
            child_id: domain.child.id,
            age_months: domain.age_months,
            milestones: domain.milestones,
        }
    }
}
