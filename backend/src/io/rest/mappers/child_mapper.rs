use shared::{Child as SharedChild, ChildListResponse, ChildResponse, CreateChildRequest};

use crate::domain::commands::child::{CreateChildCommand, ListChildrenResult};
use crate::domain::dates::format_iso_date;
use crate::domain::models::Child as DomainChild;

/// Mapper to convert between shared Child DTOs and domain Child models.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            name: domain.name,
            birth_date: format_iso_date(domain.birth_date),
            gender: domain.gender,
        }
    }

    pub fn to_create_command(request: CreateChildRequest) -> CreateChildCommand {
        CreateChildCommand {
            name: request.name,
            birth_date: request.birth_date,
            gender: request.gender,
        }
    }

    pub fn to_child_list_dto(domain: ListChildrenResult) -> ChildListResponse {
        ChildListResponse {
            children: domain.children.into_iter().map(Self::to_dto).collect(),
            max_children: domain.max_children,
        }
    }

    pub fn to_child_response_dto(domain: DomainChild, message: &str) -> ChildResponse {
        ChildResponse {
            child: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }
}
